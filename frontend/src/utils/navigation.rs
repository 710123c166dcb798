use crate::components::guard::NavigationTarget;

/// Joins a path and a query string; `search` may carry its leading `?` or not.
pub fn path_with_search(pathname: &str, search: &str) -> String {
    let search = search.trim_start_matches('?');
    if search.is_empty() {
        pathname.to_string()
    } else {
        format!("{}?{}", pathname, search)
    }
}

/// Path and query of the page currently shown in the browser.
#[cfg(target_arch = "wasm32")]
pub fn current_path() -> Option<String> {
    let location = web_sys::window()?.location();
    let pathname = location.pathname().ok()?;
    let search = location.search().unwrap_or_default();
    Some(path_with_search(&pathname, &search))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn current_path() -> Option<String> {
    None
}

/// Hard navigation through `window.location`, used when no router is mounted.
#[cfg(target_arch = "wasm32")]
pub fn assign_location(target: &NavigationTarget) {
    let href = target.href();
    let Some(win) = web_sys::window() else {
        return;
    };
    let location = win.location();
    let result = if target.replace {
        location.replace(&href)
    } else {
        location.assign(&href)
    };
    if let Err(err) = result {
        log::warn!("navigation to {} failed: {:?}", href, err);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn assign_location(target: &NavigationTarget) {
    log::debug!("no browser location; dropping navigation to {}", target.href());
}
