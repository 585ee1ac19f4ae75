//! Desktop icons

use serde::Serialize;

use folio_content::PanelKind;

/// What activating an icon does
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IconAction {
    /// Open a panel window
    Open(PanelKind),
    /// Decorative only (the recycle bin)
    Inert,
}

/// One desktop icon
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DesktopIcon {
    pub label: &'static str,
    pub image: &'static str,
    pub action: IconAction,
}

/// The fixed icon set, in layout order (the recycle bin renders bottom-right)
pub fn desktop_icons() -> &'static [DesktopIcon] {
    &[
        DesktopIcon {
            label: "My Computer",
            image: "images/icons/my-computer.png",
            action: IconAction::Open(PanelKind::About),
        },
        DesktopIcon {
            label: "About Me",
            image: "images/icons/about.png",
            action: IconAction::Open(PanelKind::About),
        },
        DesktopIcon {
            label: "Projects",
            image: "images/icons/projects-folder.png",
            action: IconAction::Open(PanelKind::Projects),
        },
        DesktopIcon {
            label: "Experience",
            image: "images/icons/experience.png",
            action: IconAction::Open(PanelKind::Experience),
        },
        DesktopIcon {
            label: "Contact",
            image: "images/icons/contact-email.png",
            action: IconAction::Open(PanelKind::Contact),
        },
        DesktopIcon {
            label: "Recycle Bin",
            image: "images/icons/recycle-bin.png",
            action: IconAction::Inert,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_set_shape() {
        let icons = desktop_icons();
        assert_eq!(icons.len(), 6);

        // Every resume panel except the browser has an icon
        for kind in [
            PanelKind::About,
            PanelKind::Projects,
            PanelKind::Experience,
            PanelKind::Contact,
        ] {
            assert!(icons
                .iter()
                .any(|i| i.action == IconAction::Open(kind)));
        }
        assert!(!icons
            .iter()
            .any(|i| i.action == IconAction::Open(PanelKind::Browser)));
    }

    #[test]
    fn test_recycle_bin_is_inert() {
        let bin = desktop_icons()
            .iter()
            .find(|i| i.label == "Recycle Bin")
            .unwrap();
        assert_eq!(bin.action, IconAction::Inert);
    }
}
