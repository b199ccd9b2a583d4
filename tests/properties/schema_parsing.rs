//! Property tests for schema and config decoding.

use std::path::Path;

use proptest::prelude::*;

use accessorgen::config::Config;
use accessorgen::{parse_schema, SchemaFormat};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: schema decoding never panics on arbitrary input.
    #[test]
    fn property_parse_schema_never_panics(s in "(?s).{0,256}") {
        for format in [SchemaFormat::Toml, SchemaFormat::Yaml, SchemaFormat::Json] {
            let _ = parse_schema(&s, format, Path::new("fuzz"));
        }
    }

    /// PROPERTY: config decoding and resolution never panic on arbitrary TOML.
    #[test]
    fn property_config_resolve_never_panics(s in "(?s).{0,256}") {
        if let Ok(config) = toml::from_str::<Config>(&s) {
            let _ = config.resolve(None);
        }
    }
}
