//! Template helper functions.

use std::collections::HashMap;
use tera::{Result, Value};

/// Name under which [`secret_path_function`] is registered in templates.
pub const SECRET_PATH_FN: &str = "secretPath";

/// Joins a normalized root folder and a service name into a secret path.
///
/// Whitespace and slashes around `service` are removed first. An empty
/// service yields `root` unchanged and an empty root yields `/service`.
///
/// ```
/// use ag_core::render::secret_path;
///
/// assert_eq!(secret_path("/api", "svc"), "/api/svc");
/// assert_eq!(secret_path("", "svc"), "/svc");
/// assert_eq!(secret_path("/api", ""), "/api");
/// ```
pub fn secret_path(root: &str, service: &str) -> String {
    let service = service.trim().trim_matches('/');
    if service.is_empty() {
        return root.to_string();
    }
    if root.is_empty() {
        return format!("/{service}");
    }
    format!("{root}/{service}")
}

/// Tera adapter for [`secret_path`]: `secretPath(root=..., service=...)`.
pub(crate) fn secret_path_function(args: &HashMap<String, Value>) -> Result<Value> {
    let root = string_arg(args, "root")?;
    let service = string_arg(args, "service")?;
    Ok(Value::String(secret_path(root, service)))
}

fn string_arg<'a>(args: &'a HashMap<String, Value>, name: &str) -> Result<&'a str> {
    args.get(name)
        .ok_or_else(|| {
            tera::Error::msg(format!("{SECRET_PATH_FN} requires a `{name}` argument"))
        })?
        .as_str()
        .ok_or_else(|| tera::Error::msg(format!("{SECRET_PATH_FN} `{name}` must be a string")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(args: &[(&str, Value)]) -> Result<Value> {
        let args = args
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect::<HashMap<_, _>>();
        secret_path_function(&args)
    }

    #[test]
    fn test_secret_path() {
        assert_eq!(secret_path("/api", "svc"), "/api/svc");
        assert_eq!(secret_path("", "svc"), "/svc");
        assert_eq!(secret_path("/api", ""), "/api");
        assert_eq!(secret_path("", ""), "");
    }

    #[test]
    fn test_secret_path_trims_service() {
        assert_eq!(secret_path("/api", "  /svc/ "), "/api/svc");
        assert_eq!(secret_path("", "//svc"), "/svc");
        assert_eq!(secret_path("/api", " / "), "/api");
    }

    #[test]
    fn test_secret_path_function() {
        let value = call(&[
            ("root", Value::String("/apps".to_string())),
            ("service", Value::String("billing".to_string())),
        ])
        .unwrap();
        assert_eq!(value.as_str(), Some("/apps/billing"));
    }

    #[test]
    fn test_secret_path_function_missing_argument() {
        let err = call(&[("root", Value::String("/apps".to_string()))]).unwrap_err();
        assert!(err.to_string().contains("service"));
    }

    #[test]
    fn test_secret_path_function_rejects_non_string() {
        let result = call(&[
            ("root", Value::String(String::new())),
            ("service", Value::Bool(true)),
        ]);
        assert!(result.is_err());
    }
}
