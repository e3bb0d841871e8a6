use serde::Serialize;

/// Transform options sent to the `obfuscate` endpoint.
///
/// Serialises to
/// `{"MinifyAll":true,"Virtualize":true,"CustomPlugins":{"DummyFunctionArgs":[6,9]}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ObfuscationSettings {
    pub minify_all: bool,
    pub virtualize: bool,
    pub custom_plugins: CustomPlugins,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomPlugins {
    /// Lower and upper bound of dummy arguments injected per function.
    pub dummy_function_args: [u32; 2],
}

impl Default for ObfuscationSettings {
    fn default() -> Self {
        Self {
            minify_all: true,
            virtualize: true,
            custom_plugins: CustomPlugins {
                dummy_function_args: [6, 9],
            },
        }
    }
}
