//! File table component.
//!
//! Rows are rebuilt from scratch whenever the visible list changes; there
//! is no keyed patching. Listings are small and refetched wholesale, so
//! the table simply mirrors whatever the pipeline produced last.

use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;

use super::HashButton;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::{FileRecord, SortKey};
use crate::utils::format::{format_modified, human_size};
use crate::utils::{download_hint, download_url};

stylance::import_crate_style!(css, "src/components/listing/table.module.css");

#[component]
pub fn FileTable() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let visible = Memo::new(move |_| ctx.visible_files());

    view! {
        <table id="filesTable" class=css::table>
            <thead>
                <tr>
                    <SortHeader attr="name" label="Name" />
                    <SortHeader attr="size" label="Size" />
                    <SortHeader attr="modified" label="Modified" />
                    <th class=css::actionHeader scope="col">"Download"</th>
                    <th class=css::actionHeader scope="col">"Checksum"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    let files = visible.get();
                    if files.is_empty() {
                        view! {
                            <tr>
                                <td class=css::empty colspan="5">"No files"</td>
                            </tr>
                        }
                            .into_any()
                    } else {
                        files
                            .into_iter()
                            .map(|file| view! { <FileRow file=file /> })
                            .collect_view()
                            .into_any()
                    }
                }}
            </tbody>
        </table>
    }
}

/// Sortable column header keyed by its `data-sort-key` value. Click (or
/// Enter) toggles the table sort.
#[component]
fn SortHeader(attr: &'static str, label: &'static str) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let key = SortKey::from_attr(attr);
    let aria_key = key.clone();
    let aria_sort = Memo::new(move |_| ctx.listing.with(|l| l.sort().aria_sort(&aria_key)));

    let toggle = move || {
        let key = key.clone();
        ctx.listing.update(|l| l.toggle_sort(key));
    };
    let on_keydown_toggle = toggle.clone();

    view! {
        <th
            class=css::sortable
            scope="col"
            tabindex="0"
            data-sort-key=attr
            aria-sort=move || aria_sort.get()
            on:click=move |_| toggle()
            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                if ev.key() == "Enter" || ev.key() == " " {
                    ev.prevent_default();
                    on_keydown_toggle();
                }
            }
        >
            <span>{label}</span>
            <span class=css::sortIcon aria-hidden="true">
                {move || view! { <Icon icon=sort_icon(aria_sort.get()) /> }}
            </span>
        </th>
    }
}

fn sort_icon(aria_sort: &str) -> IconData {
    match aria_sort {
        "ascending" => ic::SORT_ASC,
        "descending" => ic::SORT_DESC,
        _ => ic::SORT_NONE,
    }
}

#[component]
fn FileRow(file: FileRecord) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let (locale, prefix) = ctx
        .config
        .with_value(|c| (c.locale.clone(), c.download_prefix.clone()));

    let size = human_size(file.size);
    let modified = format_modified(&file.modified, &locale);
    let href = download_url(&prefix, &file.name);
    let download_title = download_hint(&file.name);
    let download_label = format!("Download {}", file.name);

    view! {
        <tr class=css::row>
            <td class=css::name>{file.name.clone()}</td>
            <td class=css::size title=file.size.to_string()>{size}</td>
            <td class=css::date title=file.modified.raw().to_string()>{modified}</td>
            <td class=css::action>
                <a
                    class=css::download
                    href=href
                    download=""
                    title=download_title
                    aria-label=download_label
                >
                    <Icon icon=ic::DOWNLOAD />
                </a>
            </td>
            <td class=css::action>
                <HashButton digest=file.sha256.clone() />
            </td>
        </tr>
    }
}
