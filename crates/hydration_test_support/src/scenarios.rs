use dom::{Dom, NodeId, NodeType};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

pub const SCENARIOS_FORMAT_V1: &str = "hydration-scenarios-v1";

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScenarioManifest {
    pub format: String,
    #[serde(rename = "scenario", default)]
    pub scenarios: Vec<Scenario>,
}

/// One server-rendered tree walked against a list of template positions.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    pub name: String,
    pub markup: String,
    /// Tag of the first element (document order) whose children are walked;
    /// the document itself when absent.
    #[serde(default)]
    pub container: Option<String>,
    #[serde(default)]
    pub mode: WalkMode,
    pub templates: Vec<String>,
    /// `describe` output of each adopted node, `<missing>` when none.
    pub adopted: Vec<String>,
    #[serde(default)]
    pub mismatches: usize,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WalkMode {
    /// One `with_hydration` scope; each template adopts the node under the cursor.
    #[default]
    Prepend,
    /// Each template publishes an append-mode insertion state and locates anew.
    Append,
}

impl Scenario {
    pub fn parse(&self) -> Dom {
        markup::parse(&self.markup)
    }

    pub fn container(&self, dom: &Dom) -> NodeId {
        let Some(tag) = self.container.as_deref() else {
            return dom.root();
        };
        find_element(dom, dom.root(), tag).unwrap_or_else(|| {
            panic!(
                "scenario '{}': no <{tag}> element in markup {:?}",
                self.name, self.markup
            )
        })
    }
}

fn find_element(dom: &Dom, from: NodeId, tag: &str) -> Option<NodeId> {
    for child in dom.children(from) {
        if dom.node_type(child) != NodeType::Element {
            continue;
        }
        if dom.tag_name(child) == Some(tag) {
            return Some(child);
        }
        if let Some(found) = find_element(dom, child, tag) {
            return Some(found);
        }
    }
    None
}

/// Load a `.toml` or `.json` scenario manifest, panicking with the path on any
/// read, parse or validation failure.
pub fn load_scenarios(path: &Path) -> ScenarioManifest {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read scenario manifest {path:?}: {err}"));
    let manifest: ScenarioManifest = match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => toml::from_str(&content)
            .unwrap_or_else(|err| panic!("failed to parse scenario TOML {path:?}: {err}")),
        Some("json") => serde_json::from_str(&content)
            .unwrap_or_else(|err| panic!("failed to parse scenario JSON {path:?}: {err}")),
        other => panic!("unsupported scenario manifest extension {other:?} for {path:?}"),
    };
    validate_manifest(&manifest, path);
    manifest
}

fn validate_manifest(manifest: &ScenarioManifest, path: &Path) {
    assert_eq!(
        manifest.format, SCENARIOS_FORMAT_V1,
        "unsupported scenario manifest format in {path:?}"
    );
    assert!(
        !manifest.scenarios.is_empty(),
        "scenario manifest {path:?} has no scenarios"
    );
    let mut names = BTreeSet::new();
    for scenario in &manifest.scenarios {
        assert!(
            names.insert(scenario.name.as_str()),
            "duplicate scenario name in {path:?}: {}",
            scenario.name
        );
        assert_eq!(
            scenario.templates.len(),
            scenario.adopted.len(),
            "scenario '{}' in {path:?}: every template needs an expected adoption",
            scenario.name
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_manifest_uses_defaults() {
        let manifest: ScenarioManifest = toml::from_str(
            r#"
            format = "hydration-scenarios-v1"

            [[scenario]]
            name = "single"
            markup = "<p>x</p>"
            templates = ["<p>"]
            adopted = ["<p>"]
            "#,
        )
        .unwrap();
        let scenario = &manifest.scenarios[0];
        assert_eq!(scenario.mode, WalkMode::Prepend);
        assert_eq!(scenario.mismatches, 0);
        let dom = scenario.parse();
        assert_eq!(scenario.container(&dom), dom.root());
    }

    #[test]
    fn json_manifest_matches_toml_shape() {
        let manifest: ScenarioManifest = serde_json::from_str(
            r#"{
                "format": "hydration-scenarios-v1",
                "scenario": [{
                    "name": "append",
                    "markup": "<ul><li></li></ul>",
                    "container": "ul",
                    "mode": "append",
                    "templates": ["<li>"],
                    "adopted": ["<li>"],
                    "mismatches": 0
                }]
            }"#,
        )
        .unwrap();
        let scenario = &manifest.scenarios[0];
        assert_eq!(scenario.mode, WalkMode::Append);
        let dom = scenario.parse();
        let ul = scenario.container(&dom);
        assert_eq!(dom.tag_name(ul), Some("ul"));
    }

    #[test]
    fn nested_container_is_found_depth_first() {
        let dom = markup::parse("<main><div><section></section></div></main><section></section>");
        let main = dom.first_child(dom.root()).unwrap();
        let inner = dom.first_child(dom.first_child(main).unwrap()).unwrap();
        assert_eq!(find_element(&dom, dom.root(), "section"), Some(inner));
    }
}
