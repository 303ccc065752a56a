//! Static page copy.

pub struct Panel {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    /// Gradient modifier class, `panel--{color}`.
    pub color: &'static str,
    pub icon: &'static str,
}

pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub features: &'static [&'static str],
    pub color: &'static str,
}

pub struct Stat {
    pub number: f64,
    pub prefix: &'static str,
    pub suffix: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub struct ContactInfo {
    pub icon: &'static str,
    pub title: &'static str,
    pub details: &'static [&'static str],
}

pub const PANELS: &[Panel] = &[
    Panel {
        id: "risk-capital",
        title: "Risk Capital",
        subtitle: "Comprehensive Risk Management",
        description: "We help clients identify, quantify, and manage risk exposures through innovative analytics and globally integrated expertise.",
        features: &[
            "Commercial Risk Solutions",
            "Reinsurance Solutions",
            "Risk Analytics",
            "Claims Management",
        ],
        color: "red",
        icon: "🛡️",
    },
    Panel {
        id: "human-capital",
        title: "Human Capital",
        subtitle: "People-Centric Solutions",
        description: "Our Human Capital solutions help organizations make better people decisions through advanced analytics and consulting.",
        features: &[
            "Health & Benefits",
            "Talent & Rewards",
            "Retirement Solutions",
            "Workplace Wellbeing",
        ],
        color: "green",
        icon: "👥",
    },
    Panel {
        id: "cyber-security",
        title: "Cyber Security",
        subtitle: "Digital Risk Protection",
        description: "Protect your organization from evolving cyber threats with our comprehensive security solutions and risk assessment.",
        features: &[
            "Threat Assessment",
            "Incident Response",
            "Security Training",
            "Risk Mitigation",
        ],
        color: "purple",
        icon: "🔒",
    },
    Panel {
        id: "analytics",
        title: "Analytics & Insights",
        subtitle: "Data-Driven Decisions",
        description: "Transform your data into actionable insights with our advanced analytics platform and expert consultation.",
        features: &[
            "Predictive Modeling",
            "Risk Assessment",
            "Performance Analytics",
            "Custom Dashboards",
        ],
        color: "orange",
        icon: "📊",
    },
    Panel {
        id: "global-reach",
        title: "Global Reach",
        subtitle: "Worldwide Presence",
        description: "With colleagues in 120+ countries, we provide locally relevant solutions backed by global expertise.",
        features: &[
            "120+ Countries",
            "50,000+ Colleagues",
            "Local Expertise",
            "Global Standards",
        ],
        color: "teal",
        icon: "🌍",
    },
];

pub const SERVICES: &[Service] = &[
    Service {
        title: "Risk Management",
        description: "Comprehensive risk assessment and mitigation strategies to protect your business.",
        icon: "⚡",
        features: &[
            "Risk Assessment",
            "Mitigation Planning",
            "Crisis Management",
            "Business Continuity",
        ],
        color: "blue",
    },
    Service {
        title: "Employee Benefits",
        description: "Design and manage benefit programs that attract and retain top talent.",
        icon: "💼",
        features: &[
            "Health & Wellness",
            "Retirement Plans",
            "Life Insurance",
            "Disability Coverage",
        ],
        color: "green",
    },
    Service {
        title: "Cyber Security",
        description: "Protect your digital assets with cutting-edge cybersecurity solutions.",
        icon: "🔐",
        features: &[
            "Threat Detection",
            "Security Training",
            "Incident Response",
            "Compliance",
        ],
        color: "purple",
    },
    Service {
        title: "Data Analytics",
        description: "Transform data into actionable insights for better business decisions.",
        icon: "📈",
        features: &[
            "Predictive Analytics",
            "Risk Modeling",
            "Performance Metrics",
            "Custom Reports",
        ],
        color: "orange",
    },
    Service {
        title: "Consulting",
        description: "Expert guidance to navigate complex business challenges and opportunities.",
        icon: "🎯",
        features: &[
            "Strategic Planning",
            "Process Optimization",
            "Change Management",
            "Best Practices",
        ],
        color: "red",
    },
    Service {
        title: "Global Solutions",
        description: "Worldwide coverage with local expertise for multinational organizations.",
        icon: "🌐",
        features: &[
            "International Coverage",
            "Local Compliance",
            "Cultural Adaptation",
            "Global Standards",
        ],
        color: "teal",
    },
];

pub const STATS: &[Stat] = &[
    Stat {
        number: 50_000.0,
        prefix: "",
        suffix: "+",
        label: "Colleagues Worldwide",
        icon: "👥",
    },
    Stat {
        number: 120.0,
        prefix: "",
        suffix: "+",
        label: "Countries & Territories",
        icon: "🌍",
    },
    Stat {
        number: 95.0,
        prefix: "",
        suffix: "%",
        label: "Client Retention Rate",
        icon: "🤝",
    },
    Stat {
        number: 4.8,
        prefix: "$",
        suffix: "T",
        label: "Assets Under Advisement",
        icon: "💰",
    },
];

pub const CONTACT_INFO: &[ContactInfo] = &[
    ContactInfo {
        icon: "📍",
        title: "Global Headquarters",
        details: &[
            "London, United Kingdom",
            "The Leadenhall Building",
            "122 Leadenhall Street",
        ],
    },
    ContactInfo {
        icon: "📞",
        title: "Contact Numbers",
        details: &["+44 20 7623 5500", "+1 312 381 1000", "+65 6395 3000"],
    },
    ContactInfo {
        icon: "✉️",
        title: "Email Addresses",
        details: &["info@aon.com", "careers@aon.com", "media@aon.com"],
    },
    ContactInfo {
        icon: "🌐",
        title: "Global Presence",
        details: &["120+ Countries", "50,000+ Colleagues", "24/7 Support"],
    },
];

pub const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("Facebook", "📘"),
    ("Twitter", "🐦"),
    ("LinkedIn", "💼"),
    ("YouTube", "📺"),
];
