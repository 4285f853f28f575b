//! YAML decoding for Docker Stack files.
//!
//! The compatibility checks are key-presence checks over a loosely-typed
//! document, so only the fields they inspect are modeled. Everything else in
//! the file is accepted and ignored.

use yaml_rust2::{Yaml, YamlLoader};

/// Error raised while decoding a stack file.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ParseError {
    /// The content is not well-formed YAML.
    #[error("{0}")]
    Syntax(String),
    /// The content parsed to no document at all.
    #[error("empty YAML document")]
    EmptyDocument,
    /// The document does not have the shape of a stack file.
    #[error("{0}")]
    Structure(String),
}

/// Decoded Docker Stack file.
#[derive(Debug, Clone, Default)]
pub struct StackFile {
    /// The top-level `version` field.
    pub version: Option<String>,
    /// Services in document order; `None` when the `services` key is absent.
    pub services: Option<Vec<Service>>,
    /// Top-level key order.
    pub top_level_keys: Vec<String>,
}

/// One named service entry under `services`.
#[derive(Debug, Clone, Default)]
pub struct Service {
    /// Service name.
    pub name: String,
    /// The service mapping's keys in document order. The presence checks
    /// (`build`, `depends_on`, `container_name`, `links`, `deploy`) run
    /// against this; values are arbitrary.
    pub keys: Vec<String>,
    /// The `deploy` section, when present.
    pub deploy: Option<Deploy>,
}

impl Service {
    /// Whether the service mapping contains `key`.
    pub fn has_key(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }
}

/// The `deploy` section of a service.
///
/// A `deploy` value that is not a mapping is kept as an empty section.
#[derive(Debug, Clone, Default)]
pub struct Deploy {
    /// The deploy mapping's keys in document order.
    pub keys: Vec<String>,
}

impl Deploy {
    /// Whether a `restart_policy` is configured.
    pub fn has_restart_policy(&self) -> bool {
        self.keys.iter().any(|k| k == "restart_policy")
    }
}

/// Parse a Docker Stack file from a string.
pub fn parse_stack(content: &str) -> Result<StackFile, ParseError> {
    let docs =
        YamlLoader::load_from_str(content).map_err(|e| ParseError::Syntax(e.to_string()))?;

    let doc = docs.into_iter().next().ok_or(ParseError::EmptyDocument)?;

    let hash = match &doc {
        Yaml::Hash(h) => h,
        Yaml::Null => return Err(ParseError::EmptyDocument),
        _ => return Err(ParseError::Structure("root must be a mapping".to_string())),
    };

    let mut stack = StackFile::default();

    for (key, _) in hash {
        if let Yaml::String(k) = key {
            stack.top_level_keys.push(k.clone());
        }
    }

    match hash.get(&Yaml::String("version".to_string())) {
        Some(Yaml::String(version)) => stack.version = Some(version.clone()),
        Some(_) => {
            return Err(ParseError::Structure(
                "`version` must be a string".to_string(),
            ));
        }
        None => {}
    }

    match hash.get(&Yaml::String("services".to_string())) {
        Some(Yaml::Hash(services)) => {
            let mut parsed = Vec::with_capacity(services.len());
            for (name_yaml, service_yaml) in services {
                let Yaml::String(name) = name_yaml else {
                    return Err(ParseError::Structure(
                        "service names must be strings".to_string(),
                    ));
                };
                parsed.push(parse_service(name, service_yaml)?);
            }
            stack.services = Some(parsed);
        }
        Some(_) => {
            return Err(ParseError::Structure(
                "`services` must be a mapping".to_string(),
            ));
        }
        None => {}
    }

    Ok(stack)
}

/// Parse a service definition.
fn parse_service(name: &str, yaml: &Yaml) -> Result<Service, ParseError> {
    let hash = match yaml {
        Yaml::Hash(h) => h,
        _ => {
            return Err(ParseError::Structure(format!(
                "service '{}' must be a mapping",
                name
            )));
        }
    };

    let mut service = Service {
        name: name.to_string(),
        ..Default::default()
    };

    for (key, value) in hash {
        if let Yaml::String(k) = key {
            service.keys.push(k.clone());
            if k == "deploy" {
                service.deploy = Some(parse_deploy(value));
            }
        }
    }

    Ok(service)
}

fn parse_deploy(yaml: &Yaml) -> Deploy {
    let mut deploy = Deploy::default();

    if let Yaml::Hash(h) = yaml {
        for (key, _) in h {
            if let Yaml::String(k) = key {
                deploy.keys.push(k.clone());
            }
        }
    }

    deploy
}
