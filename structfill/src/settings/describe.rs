//! Human-readable settings dump.

use std::collections::BTreeMap;

use serde::Serialize;

use super::Settings;

#[derive(Serialize)]
struct Dump<'a> {
    settings: Body<'a>,
}

// Tables must follow plain values in TOML, so `custom_types` stays last.
#[derive(Serialize)]
struct Body<'a> {
    int: i64,
    uint: u64,
    float: f64,
    string: &'a str,
    bool: bool,
    complex: [f64; 2],
    verbose: bool,
    fail_on_unrecognized: bool,
    max_depth: usize,
    custom_types: BTreeMap<&'a str, &'a str>,
}

impl Settings {
    /// Renders the settings as a TOML document under a `[settings]` table.
    ///
    /// Override values appear in `[settings.custom_types]` keyed by type name
    /// and rendered with `Debug`. Rendering never fails: should TOML reject a
    /// value, the `Debug` form of the settings is returned instead.
    #[must_use]
    pub fn describe(&self) -> String {
        let dump = Dump {
            settings: Body {
                int: self.int,
                uint: self.uint,
                float: self.float,
                string: &self.string,
                bool: self.boolean,
                complex: [self.complex.re, self.complex.im],
                verbose: self.verbose,
                fail_on_unrecognized: self.fail_on_unrecognized,
                max_depth: self.max_depth,
                custom_types: self
                    .overrides
                    .iter()
                    .map(|entry| (entry.type_name(), entry.rendered()))
                    .collect(),
            },
        };
        toml::to_string(&dump)
            .unwrap_or_else(|err| format!("# settings could not be rendered as TOML: {err}\n{self:?}\n"))
    }
}
