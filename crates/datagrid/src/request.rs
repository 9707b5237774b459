//! Inbound request shape and parameter parsing.

use serde_json::{Map, Value};

/// The boundary shape handed over by the HTTP layer: which action on which
/// grid, plus the raw parameter map as it arrived.
#[derive(Debug, Clone)]
pub struct DatagridRequest {
    pub action_name: String,
    pub grid_name: String,
    pub parameters: Map<String, Value>,
}

impl DatagridRequest {
    pub fn new(action_name: impl Into<String>, grid_name: impl Into<String>) -> Self {
        Self {
            action_name: action_name.into(),
            grid_name: grid_name.into(),
            parameters: Map::new(),
        }
    }

    pub fn with_parameter(mut self, key: impl Into<String>, value: Value) -> Self {
        self.parameters.insert(key.into(), value);
        self
    }
}

/// Selection parameters derived from a request.
#[derive(Debug, Clone, PartialEq)]
pub struct MassActionParameters {
    /// Include listed ids (true) or select all except them (false).
    pub inset: bool,
    /// Target row ids.
    pub values: Vec<String>,
    /// Filters to install before query construction.
    pub filters: Map<String, Value>,
}

/// Derives [`MassActionParameters`] from a raw request, applying defaults:
/// absent `inset` means true, absent `values`/`filters` mean empty.
///
/// Parsing is total: malformed parameter values fall back to the defaults
/// rather than failing, validation happens later in the dispatcher.
#[derive(Debug, Clone, Copy, Default)]
pub struct MassActionParametersParser;

impl MassActionParametersParser {
    pub fn parse(&self, request: &DatagridRequest) -> MassActionParameters {
        MassActionParameters {
            inset: self.parse_inset(&request.parameters),
            values: self.parse_values(&request.parameters),
            filters: self.parse_filters(&request.parameters),
        }
    }

    fn parse_inset(&self, parameters: &Map<String, Value>) -> bool {
        parameters
            .get("inset")
            .and_then(Value::as_bool)
            .unwrap_or(true)
    }

    /// Ids arrive either as an array or as a comma-separated string.
    fn parse_values(&self, parameters: &Map<String, Value>) -> Vec<String> {
        match parameters.get("values") {
            Some(Value::Array(values)) => values.iter().map(Self::stringify).collect(),
            Some(Value::String(joined)) => joined
                .split(',')
                .filter(|v| !v.is_empty())
                .map(str::to_owned)
                .collect(),
            _ => Vec::new(),
        }
    }

    fn parse_filters(&self, parameters: &Map<String, Value>) -> Map<String, Value> {
        parameters
            .get("filters")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default()
    }

    /// Row ids may arrive as JSON numbers; keep them as their literal text.
    fn stringify(value: &Value) -> String {
        match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(request: &DatagridRequest) -> MassActionParameters {
        MassActionParametersParser.parse(request)
    }

    #[test]
    fn defaults_apply_when_parameters_are_absent() {
        let parameters = parse(&DatagridRequest::new("delete", "product-grid"));

        assert!(parameters.inset);
        assert!(parameters.values.is_empty());
        assert!(parameters.filters.is_empty());
    }

    #[test]
    fn array_values_are_kept_as_strings() {
        let request = DatagridRequest::new("delete", "product-grid")
            .with_parameter("values", json!(["12", 34]));

        assert_eq!(parse(&request).values, vec!["12", "34"]);
    }

    #[test]
    fn string_values_are_split_on_commas() {
        let request = DatagridRequest::new("delete", "product-grid")
            .with_parameter("values", json!("a,b,,c"));

        assert_eq!(parse(&request).values, vec!["a", "b", "c"]);
    }

    #[test]
    fn explicit_inset_false_is_honored() {
        let request =
            DatagridRequest::new("delete", "product-grid").with_parameter("inset", json!(false));

        assert!(!parse(&request).inset);
    }

    #[test]
    fn filters_are_passed_through() {
        let request = DatagridRequest::new("delete", "product-grid")
            .with_parameter("filters", json!({"sku": "ABC"}));

        assert_eq!(parse(&request).filters.get("sku"), Some(&json!("ABC")));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn arb_value() -> impl Strategy<Value = Value> {
            prop_oneof![
                Just(Value::Null),
                any::<bool>().prop_map(Value::from),
                any::<i64>().prop_map(Value::from),
                "[ -~]{0,16}".prop_map(Value::from),
            ]
        }

        proptest! {
            /// Parsing is total: any flat parameter map yields defaults or
            /// better, never a panic.
            #[test]
            fn parsing_never_panics(
                entries in proptest::collection::hash_map("[a-z]{1,8}", arb_value(), 0..8),
            ) {
                let mut request = DatagridRequest::new("delete", "product-grid");
                for (key, value) in entries {
                    request = request.with_parameter(key, value);
                }

                let parameters = parse(&request);
                prop_assert!(parameters.values.iter().all(|v| !v.is_empty()) || parameters.values.is_empty());
            }
        }
    }
}
