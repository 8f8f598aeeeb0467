//! The portfolio's fixed content: project showcase entries and blog teasers.
//!
//! Everything here ships inside the binary. There is no CMS behind the site,
//! so the lists are plain statics and lookups are linear scans over three
//! elements.

use std::sync::LazyLock;

use chrono::NaiveDate;

/// One showcase entry. The card view uses the short fields; the detail modal
/// renders everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub full_description: &'static str,
    pub tech: &'static [&'static str],
    pub image: &'static str,
    pub demo_url: Option<&'static str>,
    pub github_url: Option<&'static str>,
    pub features: &'static [&'static str],
    pub challenges: &'static str,
    pub solution: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostCategory {
    Ai,
    Quantum,
    Security,
}

impl PostCategory {
    pub fn label(self) -> &'static str {
        match self {
            PostCategory::Ai => "AI",
            PostCategory::Quantum => "Quantum",
            PostCategory::Security => "Security",
        }
    }

    /// Icon-font class for the category badge.
    pub fn icon(self) -> &'static str {
        match self {
            PostCategory::Ai => "extra-brain",
            PostCategory::Quantum => "extra-code",
            PostCategory::Security => "extra-shield",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            PostCategory::Ai => "text-primary border-primary/30",
            PostCategory::Quantum => "text-secondary border-secondary/30",
            PostCategory::Security => "text-accent border-accent/30",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPost {
    pub id: u32,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub content: &'static str,
    pub category: PostCategory,
    pub read_time_minutes: u32,
    pub published_at: NaiveDate,
    pub image: &'static str,
    pub tags: &'static [&'static str],
}

impl BlogPost {
    /// Publication date the way the cards print it, e.g. "Jan 15, 2024".
    pub fn display_date(&self) -> String {
        self.published_at.format("%b %-d, %Y").to_string()
    }
}

static PROJECTS: [Project; 3] = [
    Project {
        id: 1,
        title: "3D Animated Text Explosion",
        description: "Interactive 3D text animation with explosive particle effects",
        full_description: "A stunning 3D text animation project that creates explosive particle \
            effects when text elements are triggered. Built with modern web technologies, it \
            features dynamic particle systems, realistic physics simulations, and smooth \
            WebGL-based animations that respond to user interactions in real-time.",
        tech: &["JavaScript", "Three.js", "WebGL", "GSAP", "CSS3", "HTML5"],
        image: "/3d-text-explosion-animation.svg",
        demo_url: Some("https://userinpeace.github.io/3D-Animated-Text-Explosion-"),
        github_url: Some("https://github.com/Userinpeace/3D-Animated-Text-Explosion-"),
        features: &[
            "3D text rendering with WebGL",
            "Particle explosion animations",
            "Interactive mouse and touch controls",
            "Smooth performance optimization",
            "Customizable particle effects",
            "Responsive design for all devices",
        ],
        challenges: "Creating smooth particle animations while maintaining 60fps performance \
            across different devices",
        solution: "Implemented efficient particle pooling system and optimized WebGL shaders \
            for maximum performance",
    },
    Project {
        id: 2,
        title: "Mario Trails",
        description: "Interactive Mario-themed animation with dynamic trail effects",
        full_description: "A creative web animation project featuring Mario character with \
            dynamic trail effects and interactive gameplay elements. The project showcases \
            advanced CSS animations, JavaScript interactions, and smooth character movement \
            with particle trail systems that create an engaging visual experience.",
        tech: &["JavaScript", "CSS3", "HTML5", "Canvas API", "Animation API", "DOM"],
        image: "/mario-trails-animation.svg",
        demo_url: Some("https://userinpeace.github.io/mario-trails"),
        github_url: Some("https://github.com/Userinpeace/mario-trails"),
        features: &[
            "Character animation with trail effects",
            "Interactive keyboard controls",
            "Smooth movement mechanics",
            "Dynamic particle generation",
            "Retro gaming aesthetics",
            "Cross-browser compatibility",
        ],
        challenges: "Implementing smooth trail effects that don't impact performance while \
            maintaining retro game aesthetics",
        solution: "Used canvas-based rendering with optimized particle lifecycle management \
            and CSS transforms for smooth animations",
    },
    Project {
        id: 3,
        title: "AI Live",
        description: "Real-time AI-powered live interaction platform",
        full_description: "An innovative AI-powered platform that enables real-time interactions \
            and live communication features. The project integrates advanced AI capabilities \
            with modern web technologies to create seamless user experiences, featuring \
            real-time data processing, intelligent responses, and dynamic content generation.",
        tech: &["React", "Node.js", "AI/ML APIs", "WebSocket", "Express.js", "MongoDB"],
        image: "/ai-live-platform.svg",
        demo_url: Some("https://userinpeace.github.io/ai-live"),
        github_url: Some("https://github.com/Userinpeace/ai-live"),
        features: &[
            "Real-time AI-powered interactions",
            "Live chat and communication",
            "Dynamic content generation",
            "Intelligent response system",
            "Modern responsive UI/UX",
            "Scalable backend architecture",
        ],
        challenges: "Integrating multiple AI services while maintaining low latency for \
            real-time interactions",
        solution: "Implemented efficient WebSocket connections with AI service optimization \
            and intelligent caching strategies",
    },
];

static POSTS: LazyLock<[BlogPost; 3]> = LazyLock::new(|| {
    let date = |y, m, d| {
        NaiveDate::from_ymd_opt(y, m, d).expect("Post dates should be valid calendar dates")
    };
    [
        BlogPost {
            id: 1,
            title: "The Future of AI in Web Development",
            excerpt: "Exploring how artificial intelligence is revolutionizing the way we build \
                and interact with web applications.",
            content: "Artificial intelligence is transforming web development in unprecedented \
                ways. From automated code generation to intelligent user interfaces, AI is \
                becoming an integral part of modern web development workflows...",
            category: PostCategory::Ai,
            read_time_minutes: 8,
            published_at: date(2024, 1, 15),
            image: "/neural-network-dashboard.svg",
            tags: &["AI", "Web Development", "Machine Learning", "Future Tech"],
        },
        BlogPost {
            id: 2,
            title: "Quantum Computing: Beyond Classical Limitations",
            excerpt: "Diving deep into quantum computing principles and their potential \
                applications in solving complex computational problems.",
            content: "Quantum computing represents a paradigm shift in computational power. \
                Unlike classical computers that use bits, quantum computers leverage quantum \
                bits (qubits) to perform calculations...",
            category: PostCategory::Quantum,
            read_time_minutes: 12,
            published_at: date(2024, 1, 10),
            image: "/quantum-computing-interface.svg",
            tags: &["Quantum Computing", "Physics", "Technology", "Innovation"],
        },
        BlogPost {
            id: 3,
            title: "Cybersecurity in the Age of IoT",
            excerpt: "Understanding the security challenges and solutions in our increasingly \
                connected world of Internet of Things devices.",
            content: "As IoT devices proliferate, cybersecurity becomes more critical than \
                ever. The interconnected nature of these devices creates new attack vectors \
                and security challenges...",
            category: PostCategory::Security,
            read_time_minutes: 6,
            published_at: date(2024, 1, 5),
            image: "/cybersecurity-threat-map.svg",
            tags: &["Cybersecurity", "IoT", "Network Security", "Privacy"],
        },
    ]
});

pub fn projects() -> &'static [Project] {
    &PROJECTS
}

pub fn project(id: u32) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

/// All teaser posts, newest first.
pub fn posts() -> &'static [BlogPost] {
    &*POSTS
}

pub fn post(id: u32) -> Option<&'static BlogPost> {
    POSTS.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn showcase_holds_three_projects_with_stable_ids() {
        assert_eq!(projects().len(), 3);
        for (index, p) in projects().iter().enumerate() {
            assert_eq!(p.id as usize, index + 1);
        }
    }

    #[test]
    fn every_known_id_resolves_and_unknown_ids_do_not() {
        assert_eq!(project(1).unwrap().title, "3D Animated Text Explosion");
        assert_eq!(project(2).unwrap().title, "Mario Trails");
        assert_eq!(project(3).unwrap().title, "AI Live");
        assert!(project(0).is_none());
        assert!(project(4).is_none());
    }

    #[test]
    fn projects_carry_enough_detail_for_the_modal() {
        for p in projects() {
            assert!(!p.full_description.is_empty());
            assert!(!p.tech.is_empty());
            assert!(!p.features.is_empty());
            assert!(!p.challenges.is_empty());
            assert!(!p.solution.is_empty());
        }
    }

    #[test]
    fn teasers_are_ordered_newest_first() {
        let posts = posts();
        assert_eq!(posts.len(), 3);
        for pair in posts.windows(2) {
            assert!(pair[0].published_at > pair[1].published_at);
        }
    }

    #[test]
    fn dates_render_in_card_format() {
        assert_eq!(post(1).unwrap().display_date(), "Jan 15, 2024");
        assert_eq!(post(3).unwrap().display_date(), "Jan 5, 2024");
    }

    #[test]
    fn each_category_has_badge_styling() {
        for post in posts() {
            assert!(!post.category.label().is_empty());
            assert!(post.category.icon().starts_with("extra-"));
            assert!(post.category.badge_class().contains("border-"));
        }
    }

    #[test]
    fn read_times_match_the_published_posts() {
        let times: Vec<u32> = posts().iter().map(|p| p.read_time_minutes).collect();
        assert_eq!(times, vec![8, 12, 6]);
    }
}
