use dioxus::prelude::*;

use ui::core::PlannerConfig;
use ui::theme::MAIN_CSS;
use ui::views::Planner;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Global reactive language code; AppNavbar updates it on language selection.
    let lang_code = use_signal(|| ui::i18n::FALLBACK_LANGUAGE.to_string());
    use_context_provider(|| lang_code);
    use_context_provider(PlannerConfig::default);

    rsx! {
        document::Title { "Web Planner Heatmap" }
        document::Style { "{MAIN_CSS}" }

        Planner {}
    }
}
