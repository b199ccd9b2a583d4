#![no_main]

use std::path::Path;

use accessorgen::{emit_bundle, parse_schema, EmitConfig, SchemaFormat, Target};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        for format in [SchemaFormat::Toml, SchemaFormat::Yaml, SchemaFormat::Json] {
            // Decoding and emitting arbitrary schemas must never panic
            if let Ok((bundle, _)) = parse_schema(content, format, Path::new("fuzz")) {
                for target in Target::ALL {
                    let _ = emit_bundle(&bundle, &EmitConfig::for_target(target));
                }
            }
        }
    }
});
