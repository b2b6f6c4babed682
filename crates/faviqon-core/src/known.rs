//! Known favicon fingerprints and the products that serve them.
//!
//! Read-only lookup data, built once on first use. Only the output formatter
//! consults it, and only when annotation is requested.

use std::collections::HashMap;
use std::sync::OnceLock;

const KNOWN_FINGERPRINTS: &[(i32, &str)] = &[
    (99395752, "slack-instance"),
    (116323821, "spring-boot"),
    (81586312, "Jenkins"),
    (-235701012, "Cnservers LLC"),
    (743365239, "Atlassian"),
    (2128230701, "Chainpoint"),
    (-1277814690, "LaCie"),
    (246145559, "Parse"),
    (628535358, "Atlassian"),
    (855273746, "JIRA"),
    (1318124267, "Avigilon"),
    (-305179312, "Atlassian - Confluence"),
    (786533217, "OpenStack"),
    (432733105, "Pi Star"),
    (705143395, "Atlassian"),
    (-1255347784, "Angular IO (AngularJS)"),
    (-1275226814, "XAMPP"),
    (-2009722838, "React"),
    (981867722, "Atlassian - JIRA"),
    (-923088984, "OpenStack"),
    (1405460984, "pfSense"),
    (1278323681, "Gitlab"),
    (-1010568750, "phpMyAdmin"),
    (1015545776, "pfSense"),
    (1993518473, "cPanel Login"),
    (-895890586, "PLEX Server"),
    (1544230796, "cPanel Login"),
    (1244636413, "cPanel Login"),
    (-127886975, "Metasploit"),
    (1139788073, "Metasploit"),
    (-1235192469, "Metasploit"),
    (516963061, "Gitlab"),
    (-38580010, "Magento"),
    (-1437701105, "XAMPP"),
    (86919334, "ServiceNow"),
    (-1015932800, "Ghost (CMS)"),
    (-1231681737, "Ghost (CMS)"),
    (1232159009, "Apple"),
    (1382324298, "Apple"),
    (-1498185948, "Apple"),
    (-1252041730, "Vue.js"),
    (180732787, "Apache Flink"),
];

fn table() -> &'static HashMap<i32, &'static str> {
    static TABLE: OnceLock<HashMap<i32, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| KNOWN_FINGERPRINTS.iter().copied().collect())
}

/// Product name for a fingerprint, if it is a well-known one.
pub fn product_name(fingerprint: i32) -> Option<&'static str> {
    table().get(&fingerprint).copied()
}

#[cfg(test)]
fn len() -> usize {
    table().len()
}
