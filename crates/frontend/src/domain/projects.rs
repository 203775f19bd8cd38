//! Featured projects shown on the portfolio.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub name: &'static str,
    /// i18n key of the localized summary.
    pub summary_key: &'static str,
    pub tags: &'static [&'static str],
    pub repo_url: &'static str,
    pub image: &'static str,
}

pub fn featured() -> &'static [Project] {
    &FEATURED
}

const FEATURED: [Project; 3] = [
    Project {
        id: "task-board",
        name: "Task Board",
        summary_key: "projects.task_board",
        tags: &["TypeScript", "React", "REST"],
        repo_url: "https://github.com/example/task-board",
        image: "/static/img/projects/task-board.webp",
    },
    Project {
        id: "budget-cli",
        name: "Budget CLI",
        summary_key: "projects.budget_cli",
        tags: &["Node.js", "SQLite"],
        repo_url: "https://github.com/example/budget-cli",
        image: "/static/img/projects/budget-cli.webp",
    },
    Project {
        id: "recipe-finder",
        name: "Recipe Finder",
        summary_key: "projects.recipe_finder",
        tags: &["JavaScript", "HTML", "CSS"],
        repo_url: "https://github.com/example/recipe-finder",
        image: "/static/img/projects/recipe-finder.webp",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_ids_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for project in featured() {
            assert!(seen.insert(project.id), "duplicate project id {}", project.id);
        }
    }
}
