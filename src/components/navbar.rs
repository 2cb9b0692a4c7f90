//! Fixed site navigation with section links, mobile menu, and theme switch.
//!
//! SYSTEM CONTEXT
//! ==============
//! On the home route the links animate to their section and highlight the
//! one the shell reports as active. On other routes they are ordinary links
//! back to `/#section`.

use leptos::prelude::*;
use pagecore::config::ShellConfig;
use pagecore::shell::PageShell;

use crate::components::theme_toggle::ThemeToggle;
use crate::state::shell::ShellHandle;

#[derive(Clone, Copy)]
struct NavItem {
    id: &'static str,
    label: &'static str,
}

const NAV_ITEMS: &[NavItem] = &[
    NavItem { id: "home", label: "Home" },
    NavItem { id: "about", label: "About" },
    NavItem { id: "skills", label: "Skills" },
    NavItem { id: "projects", label: "Projects" },
    NavItem { id: "experience", label: "Experience" },
    NavItem { id: "contact", label: "Contact" },
];

#[component]
pub fn Navbar() -> impl IntoView {
    let handle = expect_context::<ShellHandle>();
    let config = expect_context::<ShellConfig>();

    let menu_open = move || handle.shell.with(PageShell::is_menu_open);
    let scrolled = move || handle.shell.with(PageShell::navbar_scrolled);

    let on_brand = move |ev: leptos::ev::MouseEvent| {
        if handle.is_home() {
            ev.prevent_default();
            handle.scroll_to_section("home");
        }
    };

    view! {
        <nav class="navbar" class:navbar--scrolled=scrolled class:navbar--menu-open=menu_open aria-label="Main">
            <div class="navbar__inner">
                <a class="navbar__brand" href="/#home" on:click=on_brand>
                    {config.site_owner}
                </a>

                <ul id="navbar-menu" class="navbar__links" class:navbar__links--open=menu_open>
                    {NAV_ITEMS.iter().map(|item| view! { <NavLink item=*item/> }).collect_view()}
                </ul>

                <div class="navbar__actions">
                    <ThemeToggle/>
                    <button
                        class="navbar__menu-toggle"
                        aria-controls="navbar-menu"
                        aria-expanded=move || menu_open().to_string()
                        aria-label=move || if menu_open() { "Close menu" } else { "Open menu" }
                        on:click=move |_| handle.dispatch(PageShell::toggle_menu)
                    >
                        {move || if menu_open() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>
        </nav>
    }
}

#[component]
fn NavLink(item: NavItem) -> impl IntoView {
    let handle = expect_context::<ShellHandle>();
    let active = move || handle.is_home() && handle.shell.with(|s| s.active() == item.id);

    let on_click = move |ev: leptos::ev::MouseEvent| {
        if handle.is_home() {
            ev.prevent_default();
            handle.scroll_to_section(item.id);
        } else {
            handle.dispatch(PageShell::close_menu);
        }
    };

    view! {
        <li class="navbar__item">
            <a
                class="navbar__link"
                class:navbar__link--active=active
                aria-current=move || if active() { "true" } else { "false" }
                href=format!("/#{}", item.id)
                on:click=on_click
            >
                {item.label}
            </a>
        </li>
    }
}
