use clap::CommandFactory;

use super::*;

#[test]
fn cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn data_dir_and_base_url_fall_back_to_env() {
    let cmd = Cli::command();
    let env_of = |id: &str| {
        cmd.get_arguments()
            .find(|arg| arg.get_id().as_str() == id)
            .and_then(|arg| arg.get_env())
            .and_then(|env| env.to_str())
            .map(ToOwned::to_owned)
    };
    assert_eq!(env_of("data_dir").as_deref(), Some("BOOKFINDER_DATA_DIR"));
    assert_eq!(env_of("base_url").as_deref(), Some("BOOKFINDER_BASE_URL"));
}

#[test]
fn search_collects_multi_word_query() {
    let cli = Cli::try_parse_from(["bookfinder", "search", "dune", "messiah"]).unwrap();
    match cli.command {
        Some(Command::Search { query }) => assert_eq!(query, vec!["dune", "messiah"]),
        other => panic!("unexpected command: {other:?}"),
    }
}
