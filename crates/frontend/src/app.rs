use leptos::prelude::*;

use crate::layout::Shell;
use crate::sections::{
    AboutSection, ContactSection, HeroSection, ProjectsSection, QualificationSection,
};
use crate::shared::announcer::Announcer;
use crate::shared::i18n::I18nProvider;
use crate::shared::motion;
use crate::shared::theme::ThemeProvider;

#[component]
pub fn App() -> impl IntoView {
    // Page-wide live region for theme and language announcements.
    provide_context(Announcer::new("sr-announcer", 1500));

    // Mirror the OS motion preference onto the body.
    Effect::new(move |_| motion::watch_reduced_motion());

    view! {
        <ThemeProvider>
            <I18nProvider>
                <Shell>
                    <HeroSection />
                    <AboutSection />
                    <QualificationSection />
                    <ProjectsSection />
                    <ContactSection />
                </Shell>
            </I18nProvider>
        </ThemeProvider>
    }
}
