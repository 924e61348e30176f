/// Minimal robots.txt model: the Disallow prefixes that apply to the
/// wildcard user-agent group. This crawler identifies as a generic browser
/// UA, so only the `*` group is relevant.
#[derive(Debug, Clone, Default)]
pub struct RobotsPolicy {
    disallow: Vec<String>,
}

impl RobotsPolicy {
    /// Parse the body of a robots.txt file.
    pub fn parse(robots_txt: &str) -> Self {
        let mut disallow = Vec::new();
        let mut in_wildcard_group = false;
        let mut group_has_rules = false;

        for line in robots_txt.lines() {
            // Strip comments and surrounding whitespace
            let line = line.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }

            let Some((field, value)) = line.split_once(':') else {
                continue;
            };
            let field = field.trim().to_ascii_lowercase();
            let value = value.trim();

            match field.as_str() {
                "user-agent" => {
                    // Consecutive User-agent lines name one group whose
                    // rules apply to all of them; a User-agent after rule
                    // lines starts a new group
                    if group_has_rules {
                        in_wildcard_group = false;
                        group_has_rules = false;
                    }
                    in_wildcard_group |= value == "*";
                }
                "disallow" => {
                    group_has_rules = true;
                    if in_wildcard_group && !value.is_empty() {
                        disallow.push(value.to_string());
                    }
                }
                _ => group_has_rules = true,
            }
        }

        Self { disallow }
    }

    /// Policy used when robots.txt cannot be fetched: proceed, but the
    /// caller is expected to have logged a warning.
    pub fn allow_all() -> Self {
        Self::default()
    }

    /// Prefix match against the Disallow rules, per the original
    /// robots exclusion convention.
    pub fn is_allowed(&self, path: &str) -> bool {
        !self.disallow.iter().any(|rule| path.starts_with(rule))
    }

    pub fn disallow_rules(&self) -> &[String] {
        &self.disallow
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROBOTS: &str = "\
# sample policy
User-agent: *
Disallow: /private/
Disallow: /admin

User-agent: SomeBot
Disallow: /
";

    #[test]
    fn test_wildcard_disallow_rules() {
        let policy = RobotsPolicy::parse(ROBOTS);
        assert_eq!(policy.disallow_rules().len(), 2);
        assert!(!policy.is_allowed("/private/page.php"));
        assert!(!policy.is_allowed("/admin"));
        assert!(policy.is_allowed("/historydata/index.php"));
    }

    #[test]
    fn test_other_agent_group_ignored() {
        let policy = RobotsPolicy::parse(ROBOTS);
        // The blanket Disallow applies to SomeBot only
        assert!(policy.is_allowed("/"));
    }

    #[test]
    fn test_grouped_user_agents_share_rules() {
        let policy = RobotsPolicy::parse(
            "User-agent: *\nUser-agent: Googlebot\nDisallow: /historydata/\n",
        );
        assert!(!policy.is_allowed("/historydata/index.php"));

        // Order within the group does not matter either
        let policy = RobotsPolicy::parse(
            "User-agent: Googlebot\nUser-agent: *\nDisallow: /historydata/\n",
        );
        assert!(!policy.is_allowed("/historydata/index.php"));
    }

    #[test]
    fn test_user_agent_after_rules_starts_new_group() {
        let policy = RobotsPolicy::parse(
            "User-agent: *\nDisallow: /private/\nUser-agent: SomeBot\nDisallow: /secret/\n",
        );
        assert!(!policy.is_allowed("/private/page.php"));
        assert!(policy.is_allowed("/secret/page.php"));
    }

    #[test]
    fn test_empty_and_missing_fields() {
        let policy = RobotsPolicy::parse("User-agent: *\nDisallow:\n");
        assert!(policy.is_allowed("/anything"));

        let policy = RobotsPolicy::allow_all();
        assert!(policy.is_allowed("/historydata/monthdata.php"));
    }
}
