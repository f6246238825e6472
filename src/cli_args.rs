use std::net::SocketAddr;

use clap::Parser;

use crate::error::ErrorVerbosity;

#[derive(Debug, Parser)]
#[command(author, about, version)]
pub struct CliArgs {
    /// MongoDB connection string.
    #[clap(long, env = "MONGODB_URI", hide_env_values = true)]
    pub mongodb_uri: String,

    /// Name of the database holding the books collection.
    #[clap(long, env = "DATABASE_NAME", default_value = "LiberaBookDB")]
    pub database_name: String,

    /// Name of the books collection.
    #[clap(long, env = "COLLECTION_NAME", default_value = "Books")]
    pub collection_name: String,

    /// Address to listen on.
    #[clap(long, env = "SOCKET_ADDRESS", default_value = "127.0.0.1:5000")]
    pub socket_address: SocketAddr,

    /// How much detail error responses carry.
    #[clap(long, env = "ERROR_VERBOSITY", value_enum, default_value = "full")]
    pub error_verbosity: ErrorVerbosity,

    /// Header the API key is read from. The `code` query parameter is accepted as well.
    #[clap(long, env = "API_KEY_HEADER_NAME", default_value = "x-functions-key")]
    pub api_key_header_name: String,

    /// Accepted API keys. Leave empty to disable the key check.
    #[clap(
        long,
        env = "API_KEYS",
        value_delimiter = ',',
        hide_env_values = true
    )]
    pub api_keys: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_only_the_uri_is_given() {
        let args = CliArgs::try_parse_from(["server", "--mongodb-uri", "mongodb://localhost:27017"])
            .expect("parsable");

        assert_eq!(args.database_name, "LiberaBookDB");
        assert_eq!(args.collection_name, "Books");
        assert_eq!(args.socket_address, SocketAddr::from(([127, 0, 0, 1], 5000)));
        assert_eq!(args.error_verbosity, ErrorVerbosity::Full);
        assert_eq!(args.api_key_header_name, "x-functions-key");
        assert!(args.api_keys.is_empty());
    }

    #[test]
    fn api_keys_are_comma_separated() {
        let args = CliArgs::try_parse_from([
            "server",
            "--mongodb-uri",
            "mongodb://localhost:27017",
            "--api-keys",
            "key-1,key-2",
            "--error-verbosity",
            "status-code",
        ])
        .expect("parsable");

        assert_eq!(args.api_keys, vec!["key-1".to_string(), "key-2".to_string()]);
        assert_eq!(args.error_verbosity, ErrorVerbosity::StatusCode);
    }
}
