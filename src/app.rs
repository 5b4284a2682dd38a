//! Hello Items Frontend App
//!
//! Page header and stack notes around the item manager.

use leptos::prelude::*;

use crate::components::ItemManager;
use crate::config::{ApiConfig, ViewConfig};
use crate::models::Draft;

#[component]
pub fn App() -> impl IntoView {
    let config = ViewConfig {
        api: ApiConfig::from_build_env(),
        seed: Draft::default(),
    };

    view! {
        <div class="container">
            <header class="app-header">
                <h1>"👋 Hello World!"</h1>
                <h2>"DevContainer Demo App"</h2>
            </header>

            <p class="description">
                "This simple app demonstrates a complete fullstack application running in a VS Code Dev Container. It features a "
                <strong>"Leptos"</strong> " frontend, an " <strong>"axum"</strong> " backend, and a "
                <strong>"SQLite"</strong> " database."
            </p>

            <div class="demo-info">
                <h3>"Stack Details:"</h3>
                <ul>
                    <li>"🦀 " <strong>"Frontend:"</strong> " Leptos + Trunk (WASM)"</li>
                    <li>"⚙️ " <strong>"Backend:"</strong> " Rust + axum"</li>
                    <li>"🗄️ " <strong>"Database:"</strong> " SQLite"</li>
                    <li>"🐳 " <strong>"Environment:"</strong> " Docker + Dev Containers"</li>
                </ul>
            </div>

            <ItemManager config=config />
        </div>
    }
}
