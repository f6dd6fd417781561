//! Connection resolution through the DATABASE_URL environment variable.
//!
//! A single test keeps the env mutation serialized.

use bball_pipeline::cli::ConnectionArgs;

fn part_flags() -> ConnectionArgs {
    ConnectionArgs {
        database_url: None,
        db_host: "db".to_string(),
        db_port: 5432,
        db_user: "bball_user".to_string(),
        db_password: "bball_password".to_string(),
        db_name: "basketball_stats".to_string(),
    }
}

#[test]
fn resolution_order_is_flag_then_env_then_parts() {
    std::env::remove_var("DATABASE_URL");

    // Parts fallback: the provisioned defaults.
    let config = part_flags().resolve().unwrap();
    assert_eq!(
        config.url(),
        "postgresql://bball_user:bball_password@db:5432/basketball_stats"
    );

    // Env var takes over when set.
    std::env::set_var("DATABASE_URL", "postgresql://env_user:pw@envhost:5433/envdb");
    let config = part_flags().resolve().unwrap();
    assert_eq!(config.url(), "postgresql://env_user:pw@envhost:5433/envdb");

    // Explicit flag beats the env var.
    let mut flagged = part_flags();
    flagged.database_url = Some("postgresql://flag_user:pw@flaghost:5434/flagdb".to_string());
    let config = flagged.resolve().unwrap();
    assert_eq!(config.url(), "postgresql://flag_user:pw@flaghost:5434/flagdb");

    std::env::remove_var("DATABASE_URL");
}
