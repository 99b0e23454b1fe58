// src/ui/app.rs: navbar, sidebar and tool switching

use std::rc::Rc;

use ctf_toolbox::catalog::{category_of, ToolId, CATEGORIES, CHALLENGES};
use ctf_toolbox::config::ToolDefaults;
use gloo::events::EventListener;
use yew::prelude::*;

use super::browser::{location_hash, set_location_hash, viewport_width};
use super::pages;
use super::shell::{ShellAction, ShellContext, ShellState, Theme};

#[function_component(App)]
pub fn app() -> Html {
    let defaults = use_memo((), |_| ToolDefaults::load());
    let shell = {
        let start = location_hash()
            .as_deref()
            .and_then(ToolId::from_slug)
            .unwrap_or(defaults.start_tool);
        use_reducer(move || ShellState::initial(viewport_width(), start))
    };

    {
        let shell = shell.clone();
        use_effect_with((), move |_| {
            let listener = EventListener::new(&gloo::utils::window(), "resize", move |_| {
                shell.dispatch(ShellAction::Resize(viewport_width()));
            });
            move || drop(listener)
        });
    }

    use_effect_with(shell.active, |active| set_location_hash(active.slug()));

    let theme_class = shell.theme.class();
    let layout_class = if shell.sidebar_open { "layout sidebar-open" } else { "layout" };

    html! {
      <ContextProvider<ShellContext> context={shell.clone()}>
        <ContextProvider<Rc<ToolDefaults>> context={defaults.clone()}>
          <div class={classes!("app", theme_class)}>
            <Navbar />
            <div class={layout_class}>
              if shell.sidebar_open {
                <Sidebar />
              }
              <main class="content">
                <ToolHeader id={shell.active} />
                { pages::render(shell.active) }
              </main>
            </div>
          </div>
        </ContextProvider<Rc<ToolDefaults>>>
      </ContextProvider<ShellContext>>
    }
}

#[function_component(Navbar)]
fn navbar() -> Html {
    let Some(shell) = use_context::<ShellContext>() else { return html! {} };

    let on_menu = {
        let shell = shell.clone();
        Callback::from(move |_: MouseEvent| shell.dispatch(ShellAction::ToggleSidebar))
    };
    let on_theme = {
        let shell = shell.clone();
        Callback::from(move |_: MouseEvent| shell.dispatch(ShellAction::ToggleTheme))
    };
    let theme_label = match shell.theme {
        Theme::Dark => "Light mode",
        Theme::Light => "Dark mode",
    };

    html! {
      <nav class="navbar">
        <button class="btn" aria-label="Toggle sidebar" onclick={on_menu}>{ "☰" }</button>
        <div class="brand">{ "HexKit" }</div>
        <div class="spacer" />
        <button class="btn" onclick={on_theme}>{ theme_label }</button>
      </nav>
    }
}

#[function_component(Sidebar)]
fn sidebar() -> Html {
    let Some(shell) = use_context::<ShellContext>() else { return html! {} };

    let tool_button = |id: ToolId| -> Html {
        let is_active = shell.active == id;
        let cls = if is_active { "tab active" } else { "tab" };
        let shell = shell.clone();
        html! {
          <button
            class={cls}
            aria-current={is_active.then_some("page")}
            onclick={Callback::from(move |_: MouseEvent| shell.dispatch(ShellAction::Select(id)))}
          >
            { id.title() }
          </button>
        }
    };

    let active_category = category_of(shell.active).map(|c| c.name);

    let on_close = {
        let shell = shell.clone();
        Callback::from(move |_: MouseEvent| shell.dispatch(ShellAction::CloseSidebar))
    };

    html! {
      <aside class="sidebar">
        if !shell.is_desktop() {
          <button class="btn close" aria-label="Close sidebar" onclick={on_close}>{ "✕" }</button>
        }
        { for CATEGORIES.iter().map(|cat| html! {
            <section class={classes!("category", (active_category == Some(cat.name)).then_some("active"))}>
              <div class="block-title">{ cat.name }</div>
              <div class="smallnote">{ cat.description }</div>
              { for cat.tools.iter().copied().map(&tool_button) }
            </section>
        })}
        <section class="category">
          <div class="block-title">{ "CTF Challenge Types" }</div>
          { for CHALLENGES.iter().map(|ch| html! {
              <details class="challenge">
                <summary title={ch.description}>{ ch.title }</summary>
                { for ch.tools.iter().copied().map(&tool_button) }
              </details>
          })}
        </section>
      </aside>
    }
}

#[derive(Properties, PartialEq)]
struct ToolHeaderProps {
    id: ToolId,
}

#[function_component(ToolHeader)]
fn tool_header(props: &ToolHeaderProps) -> Html {
    let tool = props.id.tool();
    html! {
      <header class="tool-header">
        if let Some(cat) = category_of(props.id) {
          <div class="smallnote">{ cat.name }</div>
        }
        <h1>{ tool.title }</h1>
        <p class="smallnote">{ tool.description }</p>
      </header>
    }
}
