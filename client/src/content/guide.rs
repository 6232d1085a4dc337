//! Survival guide sections for network admins.

#[cfg(test)]
#[path = "guide_test.rs"]
mod guide_test;

use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    Basic,
    Intermediate,
    Advanced,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Basic, Level::Intermediate, Level::Advanced];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl FromStr for Level {
    type Err = ();

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|l| l.as_str() == raw).ok_or(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    pub id: u32,
    pub title: &'static str,
    pub level: Level,
    pub content: &'static [&'static str],
    pub tips: &'static [&'static str],
    pub warning: Option<&'static str>,
}

pub const SECTIONS: [Section; 8] = [
    Section {
        id: 1,
        title: "Basic Operational Security",
        level: Level::Basic,
        content: &[
            "Always use encrypted communication channels",
            "Change passwords frequently and use unique passwords",
            "Never access sensitive systems from compromised networks",
            "Use VPN and Tor for all network activities",
            "Keep system updates current and security patches applied",
        ],
        tips: &[
            "Create separate identities for different operations",
            "Use burner devices for high-risk activities",
            "Always have an exit strategy planned",
        ],
        warning: None,
    },
    Section {
        id: 2,
        title: "Daemon Detection & Evasion",
        level: Level::Intermediate,
        content: &[
            "Monitor network traffic for unusual patterns",
            "Watch for repeated failed login attempts",
            "Look for unauthorized processes running on systems",
            "Check for new network connections and listening ports",
            "Monitor system resource usage for anomalies",
        ],
        tips: &[
            "Daemons often leave traces in log files - check regularly",
            "Use network segmentation to limit breach impact",
            "Implement honeypots to detect intrusion attempts",
        ],
        warning: Some("If daemon activity is detected, immediately isolate affected systems"),
    },
    Section {
        id: 3,
        title: "Emergency Protocols",
        level: Level::Advanced,
        content: &[
            "Implement dead man's switches on critical systems",
            "Prepare data destruction procedures for sensitive information",
            "Establish secure communication with resistance cells",
            "Create multiple escape routes and safe houses",
            "Maintain emergency supplies (food, water, equipment)",
        ],
        tips: &[
            "Practice emergency procedures regularly",
            "Keep emergency contacts memorized, not written",
            "Have multiple backup plans for every scenario",
        ],
        warning: Some("Emergency protocols should only be activated in extreme situations"),
    },
    Section {
        id: 4,
        title: "Counter-Surveillance Techniques",
        level: Level::Intermediate,
        content: &[
            "Vary your daily routines and travel routes",
            "Use signal-blocking containers for electronic devices",
            "Employ misdirection and false information trails",
            "Utilize crowd camouflage in public spaces",
            "Implement time-delayed information releases",
        ],
        tips: &[
            "Surveillance teams often work in patterns - learn to recognize them",
            "Digital surveillance is harder to detect than physical",
            "Counter-surveillance requires patience and discipline",
        ],
        warning: None,
    },
    Section {
        id: 5,
        title: "Secure Communications",
        level: Level::Intermediate,
        content: &[
            "Use end-to-end encrypted messaging applications",
            "Implement frequency-hopping radio communications",
            "Utilize steganography to hide messages in plain sight",
            "Establish code words and authentication phrases",
            "Use burst transmissions to minimize exposure",
        ],
        tips: &[
            "Never trust a communication method completely",
            "Always assume channels are monitored",
            "Rotate encryption keys frequently",
        ],
        warning: None,
    },
    Section {
        id: 6,
        title: "System Hardening",
        level: Level::Advanced,
        content: &[
            "Implement multi-factor authentication on all accounts",
            "Use application whitelisting instead of blacklisting",
            "Deploy intrusion detection and prevention systems",
            "Segment networks with proper access controls",
            "Regularly audit and monitor all system activities",
        ],
        tips: &[
            "Defense in depth - use multiple security layers",
            "Assume breach mentality - plan for when, not if",
            "Regular security assessments are crucial",
        ],
        warning: None,
    },
    Section {
        id: 7,
        title: "Physical Security",
        level: Level::Basic,
        content: &[
            "Secure all physical access points to critical areas",
            "Use surveillance systems with motion detection",
            "Implement badge/key card access controls",
            "Establish visitor escort procedures",
            "Secure disposal of sensitive documents and devices",
        ],
        tips: &[
            "Physical access often bypasses digital security",
            "Social engineering is a common attack vector",
            "Train all personnel on security awareness",
        ],
        warning: None,
    },
    Section {
        id: 8,
        title: "Psychological Resilience",
        level: Level::Advanced,
        content: &[
            "Develop mental resilience through training and preparation",
            "Learn interrogation resistance techniques",
            "Practice compartmentalization of sensitive information",
            "Build stress management and coping strategies",
            "Maintain operational discipline under pressure",
        ],
        tips: &[
            "Mental preparation is as important as technical skills",
            "Trust few people, verify everything",
            "Stay focused on the mission objectives",
        ],
        warning: Some("Psychological warfare is a primary daemon tactic"),
    },
];

/// Sections at `level`; `None` keeps all of them.
pub fn at_level(level: Option<Level>) -> Vec<Section> {
    SECTIONS.into_iter().filter(|s| level.is_none_or(|l| s.level == l)).collect()
}
