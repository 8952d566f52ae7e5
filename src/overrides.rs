use serde_json::{Map, Value};
use tracing::debug;

pub const REQUIRE_SECTIONS: [(&str, &str); 2] = [
    ("override-require", "require"),
    ("override-require-dev", "require-dev"),
];
pub const REPOSITORY_OVERRIDES: &str = "override-repositories";
pub const REPOSITORIES: &str = "repositories";

/// Apply the override rules in `modifier` onto `base` in place.
///
/// Each pass is skipped when either document lacks its section, so a modifier
/// without override keys leaves `base` untouched.
pub fn apply_overrides(base: &mut Value, modifier: &Value) {
    for (override_key, section) in REQUIRE_SECTIONS {
        let Some(rules) = modifier.get(override_key).and_then(Value::as_object) else {
            continue;
        };
        let Some(packages) = base.get_mut(section).and_then(Value::as_object_mut) else {
            continue;
        };
        override_packages(section, packages, rules);
    }

    let Some(rules) = modifier.get(REPOSITORY_OVERRIDES).and_then(Value::as_object) else {
        return;
    };
    let Some(repositories) = base.get_mut(REPOSITORIES).and_then(Value::as_array_mut) else {
        return;
    };
    override_repositories(repositories, rules);
}

fn override_packages(section: &str, packages: &mut Map<String, Value>, rules: &Map<String, Value>) {
    for (package, version) in rules {
        if removes_package(version) {
            if packages.shift_remove(package).is_some() {
                debug!(section, package = %package, "removed package");
            }
        } else {
            debug!(section, package = %package, version = %version, "pinned package");
            packages.insert(package.clone(), version.clone());
        }
    }
}

/// Blank versions remove the package: `""`, `null` and `false`.
fn removes_package(version: &Value) -> bool {
    match version {
        Value::Null | Value::Bool(false) => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

fn override_repositories(repositories: &mut Vec<Value>, rules: &Map<String, Value>) {
    for (url, replacement) in rules {
        let existing = repositories
            .iter()
            .position(|repo| repo.get("url").and_then(Value::as_str) == Some(url.as_str()));

        match existing {
            Some(index) => {
                debug!(url = %url, index, "replaced repository");
                repositories[index] = replacement.clone();
            }
            None => {
                debug!(url = %url, "appended repository");
                repositories.push(replacement.clone());
            }
        }
    }
}
