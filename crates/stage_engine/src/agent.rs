/// Desktop-browser version token inserted during fingerprint
/// normalization.
pub const VERSION_TOKEN: &str = "Version/16.2";

const GECKO_ANCHOR: &str = "like Gecko)";
const MOBILE_ANCHOR: &str = "Mobile/";

/// Normalize a client-identification string.
///
/// If the string already advertises a `Version/` marker it is returned
/// unchanged. Otherwise the fixed token is inserted at the first
/// recognized anchor: after `"like Gecko)"`, or before `"Mobile/"`. With
/// neither anchor present the string passes through untouched. No further
/// control flow depends on the result.
pub fn patch_user_agent(agent: &str) -> String {
    if agent.contains("Version/") {
        return agent.to_string();
    }

    let mut patched = agent.to_string();
    if let Some(pos) = agent.find(GECKO_ANCHOR) {
        patched.insert_str(pos + GECKO_ANCHOR.len(), &format!(" {VERSION_TOKEN}"));
    } else if let Some(pos) = agent.find(MOBILE_ANCHOR) {
        patched.insert_str(pos, &format!("{VERSION_TOKEN} "));
    }
    patched
}
