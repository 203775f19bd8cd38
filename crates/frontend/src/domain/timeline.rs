//! Static data behind the qualification timeline.
//!
//! Entries are compiled in; adding one means adding an element to the
//! matching array below.

/// Completion state of a timeline entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStatus {
    /// Ongoing education.
    InProgress,
    /// Current position.
    Current,
    Completed,
}

impl EntryStatus {
    /// Modifier on the status badge class.
    pub fn css_modifier(&self) -> &'static str {
        match self {
            EntryStatus::InProgress | EntryStatus::Current => "active",
            EntryStatus::Completed => "completed",
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            EntryStatus::InProgress => "timeline.status_in_progress",
            EntryStatus::Current => "timeline.status_current",
            EntryStatus::Completed => "timeline.status_completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEntry {
    pub id: u32,
    pub title: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
    pub status: EntryStatus,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub certificate_url: Option<&'static str>,
}

/// Timeline tab categories, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineCategory {
    Education,
    Courses,
    Experience,
}

impl TimelineCategory {
    pub const ALL: [TimelineCategory; 3] = [Self::Education, Self::Courses, Self::Experience];

    /// DOM id of the tab control; panel ids derive from it.
    pub fn tab_id(&self) -> &'static str {
        match self {
            TimelineCategory::Education => "timeline-tab-education",
            TimelineCategory::Courses => "timeline-tab-courses",
            TimelineCategory::Experience => "timeline-tab-experience",
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            TimelineCategory::Education => "timeline.education",
            TimelineCategory::Courses => "timeline.courses",
            TimelineCategory::Experience => "timeline.experience",
        }
    }

}

pub fn entries(category: TimelineCategory) -> &'static [TimelineEntry] {
    match category {
        TimelineCategory::Education => &EDUCATION,
        TimelineCategory::Courses => &COURSES,
        TimelineCategory::Experience => &EXPERIENCE,
    }
}

const EDUCATION: [TimelineEntry; 2] = [
    TimelineEntry {
        id: 1,
        title: "BSc in Computer Science",
        institution: "Cruzeiro do Sul University",
        period: "2023 - 2026",
        status: EntryStatus::InProgress,
        description: "Solid grounding in programming logic, web and mobile development, \
                      algorithms and data structures, operating systems and databases, \
                      building toward software engineering.",
        tags: &["Back-end", "Front-end", "Algorithms", "Databases"],
        certificate_url: None,
    },
    TimelineEntry {
        id: 2,
        title: "Technical Degree in Systems Development",
        institution: "ETEC State Technical School",
        period: "2020 - 2022",
        status: EntryStatus::Completed,
        description: "Programming fundamentals, application development and databases, \
                      from programming logic through complete end-to-end projects.",
        tags: &["Programming", "Web", "Databases"],
        certificate_url: Some("/static/docs/etec.pdf"),
    },
];

const COURSES: [TimelineEntry; 2] = [
    TimelineEntry {
        id: 3,
        title: "Discover - Foundations Track",
        institution: "Rocketseat",
        period: "2024",
        status: EntryStatus::Completed,
        description: "Front-end and back-end essentials for web and mobile development, \
                      with a focus on problem solving and building modern, scalable \
                      applications.",
        tags: &["HTML", "CSS", "JavaScript", "React"],
        certificate_url: Some("https://app.rocketseat.com.br/certificates/discover-foundations"),
    },
    TimelineEntry {
        id: 4,
        title: "Data Modeling",
        institution: "SENAI",
        period: "2021",
        status: EntryStatus::Completed,
        description: "Structuring information with entity-relationship diagrams and \
                      normalization, plus data-analysis practice for well-planned, \
                      functional databases.",
        tags: &["Databases", "SQL", "Modeling"],
        certificate_url: Some("/static/docs/data-modeling.pdf"),
    },
];

const EXPERIENCE: [TimelineEntry; 2] = [
    TimelineEntry {
        id: 5,
        title: "Technical Support Analyst",
        institution: "Wise System · Full-time",
        period: "January 2026 - Present",
        status: EntryStatus::Current,
        description: "Customer-facing technical support over phone, chat, e-mail and \
                      remote access, plus ticket management through the internal \
                      service-desk system.",
        tags: &["Support", "Customer Service", "Service Desk"],
        certificate_url: None,
    },
    TimelineEntry {
        id: 6,
        title: "Technical Support Intern",
        institution: "Wise System · Internship",
        period: "April 2025 - December 2025",
        status: EntryStatus::Completed,
        description: "First professional experience in technical support: guiding \
                      customers through the company's software and handling service \
                      requests end to end.",
        tags: &["Support", "Customer Service", "Service Desk"],
        certificate_url: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_entries() {
        for category in TimelineCategory::ALL {
            assert!(!entries(category).is_empty(), "{category:?} is empty");
        }
    }

    #[test]
    fn entry_ids_are_unique_across_categories() {
        let mut seen = std::collections::HashSet::new();
        for category in TimelineCategory::ALL {
            for entry in entries(category) {
                assert!(seen.insert(entry.id), "duplicate entry id {}", entry.id);
            }
        }
    }

    #[test]
    fn tab_ids_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for category in TimelineCategory::ALL {
            assert!(seen.insert(category.tab_id()));
        }
    }

    #[test]
    fn certificate_links_are_not_blank() {
        for category in TimelineCategory::ALL {
            for entry in entries(category) {
                if let Some(url) = entry.certificate_url {
                    assert!(!url.trim().is_empty(), "blank certificate on {}", entry.id);
                }
            }
        }
    }
}
