//! Static portfolio content. Read-only; the progression core only borrows
//! names and indices from it to build action ids.

pub struct Links {
    pub github: Option<&'static str>,
    pub linkedin: Option<&'static str>,
    pub leetcode: Option<&'static str>,
}

pub struct StatCard {
    pub label: &'static str,
    pub value: u32,
    pub icon: &'static str,
    pub description: &'static str,
}

pub struct Personal {
    pub name: &'static str,
    pub role: &'static str,
    pub intro: &'static str,
    pub bio: &'static str,
    pub location: &'static str,
    pub languages: &'static [&'static str],
    pub email: &'static str,
    pub links: Links,
    pub stats: &'static [StatCard],
    pub level: u32,
}

pub struct Skill {
    pub name: &'static str,
    pub proficiency: u32,
}

pub struct SkillCategory {
    pub category: &'static str,
    pub items: &'static [Skill],
}

pub struct Project {
    pub title: &'static str,
    pub role: &'static str,
    pub description: &'static str,
    pub tech_stack: &'static [&'static str],
    pub link: Option<&'static str>,
    pub github: Option<&'static str>,
    pub status: &'static str,
    pub features: &'static [&'static str],
}

pub struct Experience {
    pub company: &'static str,
    pub role: &'static str,
    pub duration: &'static str,
    pub location: &'static str,
    pub responsibilities: &'static [&'static str],
    pub tech_stack: &'static [&'static str],
}

pub struct Education {
    pub institution: &'static str,
    pub degree: &'static str,
    pub duration: &'static str,
    pub cgpa: &'static str,
    pub coursework: &'static str,
}

pub const PERSONAL: Personal = Personal {
    name: "Ayesha Mohapatra",
    role: "Aspiring Software Development Engineer",
    intro: "Building scalable distributed systems and solving complex algorithmic challenges.",
    bio: "Aspiring Software Development Engineer with a strong foundation in Data Structures, Algorithms, and System Design. I specialize in building high-performance backend systems and scalable full-stack applications. With over 100+ LeetCode problems solved, I thrive on optimizing code efficiency and architecting robust solutions.",
    location: "Bhubaneswar, India",
    languages: &["English", "Hindi"],
    email: "ayeshamohapatra12@gmail.com",
    links: Links {
        github: Some("https://github.com/ayesha2104"),
        linkedin: Some("https://linkedin.com/in/ayesha-mohapatra"),
        leetcode: Some("https://leetcode.com/u/ayeshamohapatra"),
    },
    stats: &[
        StatCard { label: "DSA & Problem Solving", value: 90, icon: "⚡", description: "100+ LeetCode Problems" },
        StatCard { label: "System Design", value: 85, icon: "🧩", description: "Scalable Architecture" },
        StatCard { label: "Backend Engineering", value: 88, icon: "🛠", description: "API Development" },
        StatCard { label: "CS Fundamentals", value: 92, icon: "🎓", description: "OS, DBMS, CN" },
    ],
    level: 5,
};

pub const SKILLS: &[SkillCategory] = &[
    SkillCategory {
        category: "Core Computer Science",
        items: &[
            Skill { name: "Data Structures & Algo", proficiency: 90 },
            Skill { name: "System Design", proficiency: 80 },
            Skill { name: "OOPs", proficiency: 85 },
            Skill { name: "DBMS", proficiency: 85 },
            Skill { name: "OS", proficiency: 85 },
            Skill { name: "CN", proficiency: 85 },
        ],
    },
    SkillCategory {
        category: "Backend & Cloud",
        items: &[
            Skill { name: "Node.js", proficiency: 85 },
            Skill { name: "Express.js", proficiency: 85 },
        ],
    },
    SkillCategory {
        category: "Frontend & Languages",
        items: &[
            Skill { name: "JavaScript/TypeScript", proficiency: 90 },
            Skill { name: "React.js", proficiency: 85 },
            Skill { name: "Java", proficiency: 80 },
            Skill { name: "Tailwind CSS", proficiency: 90 },
        ],
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Brainiacs - Enterprise ERP System",
        role: "Full Stack Engineer",
        description: "A comprehensive educational management system handling complex data relationships and role-based access control (RBAC). Designed to manage thousands of students, teachers, and administrative records with optimal query performance.",
        tech_stack: &["MongoDB", "Express.js", "React.js", "Node.js", "JWT", "Redis"],
        link: Some("https://github.com/ayesha2104/Brainiacs"),
        github: Some("https://github.com/ayesha2104/Brainiacs"),
        status: "Completed",
        features: &[
            "Implemented Role-Based Access Control (RBAC) securely using JWT middleware.",
            "Optimized database schema with complex aggregation pipelines for real-time analytics.",
            "Designed RESTful APIs handling concurrent requests efficiently.",
            "Integrated real-time dashboard for administrative monitoring.",
        ],
    },
    Project {
        title: "CollabFlow",
        role: "Backend Architect",
        description: "A high-performance project management tool enabling multiple users to start quests, update tasks, and chat in real-time. Focuses on concurrency control and low-latency communication.",
        tech_stack: &["Socket.io", "React", "Node.js", "Redis", "PostgreSQL"],
        link: None,
        github: None,
        status: "In Progress",
        features: &[
            "Engineered real-time bi-directional communication using WebSockets (Socket.io).",
            "Implemented Optimistic UI updates for instant user feedback.",
            "Designed a scalable pub/sub architecture for chat functionality.",
            "Handled data consistency across concurrent user sessions.",
        ],
    },
    Project {
        title: "Scalable URL Shortener",
        role: "System Designer",
        description: "A highly available and scalable URL shortening service designed to handle high read traffic. Focuses on hashing algorithms, caching strategies, and database scalability.",
        tech_stack: &["Node.js", "Redis", "MongoDB", "Docker", "Nginx"],
        link: None,
        github: None,
        status: "In Progress",
        features: &[
            "Implemented a custom base62 encoding algorithm for unique URL generation.",
            "Utilized Redis caching to reduce database read operations by 80%.",
            "Dockerized the application for consistent deployment environments.",
            "Designed for horizontal scalability behind a load balancer (Nginx).",
        ],
    },
    Project {
        title: "Obesity Classification using Machine Learning",
        role: "Machine Learning Engineer",
        description: "A data-driven system that predicts obesity levels based on lifestyle habits, dietary patterns, and physical attributes. Focuses on robust preprocessing, model comparison, and explainable AI to support health analytics.",
        tech_stack: &["Python", "Scikit-learn", "XGBoost", "SHAP", "Pandas", "NumPy", "Matplotlib", "Seaborn"],
        link: Some("https://github.com/ayesha2104/obesity-classification-ml"),
        github: Some("https://github.com/ayesha2104/obesity-classification-ml"),
        status: "Completed",
        features: &[
            "Preprocessed structured health data using Label Encoding, StandardScaler, and Isolation Forest to remove anomalies.",
            "Performed exploratory data analysis with correlation heatmaps, boxplots, and lifestyle-based obesity trend analysis.",
            "Applied DBSCAN and KMeans with LDA to identify lifestyle-obesity group patterns.",
            "Trained and evaluated Logistic Regression, Random Forest, SVM, KNN, and XGBoost classifiers.",
            "Achieved best performance with XGBoost at 96.3% accuracy across 7 obesity categories.",
            "Used SHAP to identify key predictive factors such as weight, diet, physical activity, and hydration.",
        ],
    },
];

pub const EXPERIENCE: &[Experience] = &[Experience {
    company: "Techwalla.in",
    role: "Frontend Developer Intern",
    duration: "June 2025 - July 2025",
    location: "Remote",
    responsibilities: &[
        "Developed scalable UI components using React.js, ensuring 100% responsiveness.",
        "Refactored legacy codebases to improve maintainability and performance.",
        "Collaborated in Agile sprints to deliver features ahead of schedule.",
        "Integrated secure APIs and handled complex state management.",
    ],
    tech_stack: &["React.js", "TypeScript", "Tailwind CSS", "Git", "REST APIs"],
}];

pub const EDUCATION: &[Education] = &[Education {
    institution: "Silicon University, BBSR",
    degree: "B.Tech in Computer Science & Engineering",
    duration: "2023 - 2027",
    cgpa: "8.88",
    coursework: "Data Structures & Algorithms, Operating Systems, DBMS, Computer Networks, System Design",
}];

pub const ACHIEVEMENTS: &[&str] = &[
    "Global Rank 500 in LeetCode Bi-Weekly Contest.",
    "Solved 500+ algorithmic problems across LeetCode, GFG, and CodeStudio.",
    "Winner of Smart India Hackathon (internal rounds).",
    "Active Open Source contributor to community projects.",
];

pub const BOOT_LOGS: &[&str] = &[
    "> INITIALIZING KERNEL...",
    "> LOADING RENDERING ENGINE...",
    "> SYNCING NEURAL INTERFACE...",
    "> ACCESS GRANTED: AYESHA_v5.0",
];

// ---------------- Derived views -----------------

/// Every skill paired with its category, in display order.
pub fn all_skills() -> Vec<(&'static str, &'static Skill)> {
    SKILLS
        .iter()
        .flat_map(|c| c.items.iter().map(move |s| (c.category, s)))
        .collect()
}

/// Skills unlocked by clicking `skill`: itself and the rest of its branch.
/// Runs to the end of the branch even past skills that are already unlocked.
pub fn skill_cascade(category: &str, skill: &str) -> Vec<&'static str> {
    let Some(cat) = SKILLS.iter().find(|c| c.category == category) else {
        return Vec::new();
    };
    match cat.items.iter().position(|s| s.name == skill) {
        Some(i) => cat.items[i..].iter().map(|s| s.name).collect(),
        None => Vec::new(),
    }
}

/// Cascade from the root of every branch, i.e. every skill.
pub fn neural_scan() -> Vec<&'static str> {
    SKILLS
        .iter()
        .filter_map(|c| c.items.first().map(|s| (c.category, s.name)))
        .flat_map(|(cat, first)| skill_cascade(cat, first))
        .collect()
}

pub enum Milestone {
    Education(&'static Education),
    Experience(&'static Experience),
}

impl Milestone {
    pub fn title(&self) -> &'static str {
        match self {
            Milestone::Education(e) => e.institution,
            Milestone::Experience(e) => e.company,
        }
    }

    pub fn sub(&self) -> &'static str {
        match self {
            Milestone::Education(e) => e.degree,
            Milestone::Experience(e) => e.role,
        }
    }

    pub fn duration(&self) -> &'static str {
        match self {
            Milestone::Education(e) => e.duration,
            Milestone::Experience(e) => e.duration,
        }
    }
}

/// Timeline checkpoints: education first, then work.
pub fn milestones() -> Vec<Milestone> {
    EDUCATION
        .iter()
        .map(Milestone::Education)
        .chain(EXPERIENCE.iter().map(Milestone::Experience))
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct Channel {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub link: Option<String>,
}

pub fn contact_channels() -> Vec<Channel> {
    let links = PERSONAL.links;
    vec![
        Channel { id: "github", label: "GITHUB", icon: "🐙", link: links.github.map(str::to_string) },
        Channel { id: "linkedin", label: "LINKEDIN", icon: "💼", link: links.linkedin.map(str::to_string) },
        Channel { id: "email", label: "EMAIL", icon: "✉", link: Some(format!("mailto:{}", PERSONAL.email)) },
        Channel { id: "leetcode", label: "LEETCODE", icon: "⌨", link: links.leetcode.map(str::to_string) },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cascade_takes_rest_of_branch() {
        assert_eq!(
            skill_cascade("Frontend & Languages", "React.js"),
            vec!["React.js", "Java", "Tailwind CSS"]
        );
        assert_eq!(skill_cascade("Backend & Cloud", "Express.js"), vec!["Express.js"]);
        assert!(skill_cascade("Backend & Cloud", "Java").is_empty());
        assert!(skill_cascade("Cooking", "OS").is_empty());
    }

    #[test]
    fn neural_scan_unlocks_every_skill() {
        let scanned = neural_scan();
        let all: Vec<&str> = all_skills().iter().map(|(_, s)| s.name).collect();
        assert_eq!(scanned, all);
        assert_eq!(all.len(), 12);
    }

    #[test]
    fn milestones_put_education_first() {
        let ms = milestones();
        assert_eq!(ms.len(), EDUCATION.len() + EXPERIENCE.len());
        assert_eq!(ms[0].title(), "Silicon University, BBSR");
        assert_eq!(ms[1].sub(), "Frontend Developer Intern");
    }

    #[test]
    fn email_channel_is_mailto() {
        let channels = contact_channels();
        let email = channels.iter().find(|c| c.id == "email").unwrap();
        assert_eq!(email.link.as_deref(), Some("mailto:ayeshamohapatra12@gmail.com"));
        assert_eq!(channels.len(), 4);
    }
}
