//! Fixed remediation advice printed at the end of every diagnosis.
//!
//! The advice never depends on what the earlier steps found; configuration
//! only fills in paths and names.

use crate::domain::config::DoctorConfig;

/// One suggested way out, with the text printed under its title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemediationOption {
    pub title: String,
    pub lines: Vec<String>,
}

/// The three remediation options, most recommended first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemediationPlan {
    pub options: Vec<RemediationOption>,
}

/// Build the remediation text for `config`.
#[must_use]
pub fn remediation_plan(config: &DoctorConfig) -> RemediationPlan {
    let vendor = &config.theme.vendor;
    let theme = &config.theme.name;
    let locale = &config.theme.locale;
    let site = &config.site_url;

    RemediationPlan {
        options: vec![
            RemediationOption {
                title: "Full Static Content Deployment (RECOMMENDED)".to_string(),
                lines: vec![
                    "Run these commands:".to_string(),
                    String::new(),
                    format!("cd {}", config.root.display()),
                    "php bin/magento cache:clean".to_string(),
                    format!("rm -rf pub/static/frontend/{vendor}/*"),
                    "rm -rf var/view_preprocessed/*".to_string(),
                    format!(
                        "php bin/magento setup:static-content:deploy {locale} -f --theme {vendor}/{theme} -j 4"
                    ),
                    "php bin/magento cache:flush".to_string(),
                ],
            },
            RemediationOption {
                title: "Developer Mode Auto-Generation".to_string(),
                lines: vec![
                    "If in developer mode, access the site with different user agents:".to_string(),
                    format!("- Mobile: {site} (with mobile user agent)"),
                    format!("- Desktop: {site} (with desktop user agent)"),
                ],
            },
            RemediationOption {
                title: "Manual CSS File Creation (QUICK FIX)".to_string(),
                lines: vec![
                    "Create the CSS file manually from the compiled output above".to_string(),
                ],
            },
        ],
    }
}
