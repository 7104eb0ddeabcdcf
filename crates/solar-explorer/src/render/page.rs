//! Explorer page

use std::fmt::Write;

use super::escape_html;
use super::table::{TableBody, COLUMNS};
use crate::types::{SortDirection, SortField};

/// Offline-caching worker served at `/sw.js`
pub const SERVICE_WORKER_JS: &str = r#"const CACHE_NAME = 'solar-explorer-v1';
const PRECACHE = ['/', '/solar_system_data.json'];

self.addEventListener('install', event => {
    event.waitUntil(caches.open(CACHE_NAME).then(cache => cache.addAll(PRECACHE)));
});

self.addEventListener('activate', event => {
    event.waitUntil(
        caches.keys().then(keys =>
            Promise.all(keys.filter(key => key !== CACHE_NAME).map(key => caches.delete(key)))
        )
    );
});

self.addEventListener('fetch', event => {
    if (event.request.method !== 'GET') {
        return;
    }
    event.respondWith(
        fetch(event.request)
            .then(response => {
                const copy = response.clone();
                caches.open(CACHE_NAME).then(cache => cache.put(event.request, copy));
                return response;
            })
            .catch(() => caches.match(event.request))
    );
});
"#;

const REGISTER_WORKER_JS: &str = r#"<script>
if ('serviceWorker' in navigator) {
    window.addEventListener('load', () => {
        navigator.serviceWorker.register('/sw.js');
    });
}
</script>"#;

const STYLE: &str = r#"<style>
body { font-family: sans-serif; margin: 2rem; }
table { border-collapse: collapse; }
th, td { border: 1px solid #ccc; padding: 0.3rem 0.6rem; text-align: left; }
.controls { margin-bottom: 1rem; display: flex; gap: 0.5rem; align-items: center; }
.error { background: #fdd; border: 1px solid #c00; padding: 0.5rem; margin-bottom: 1rem; }
</style>"#;

/// Everything the page shows for one request
#[derive(Debug, Clone)]
pub struct Page<'a> {
    pub title: &'a str,
    pub table: &'a TableBody,
    /// Value of the field selector
    pub field: SortField,
    pub direction: SortDirection,
    /// Inline SVG chart, when activated
    pub chart: Option<&'a str>,
    /// Load failure shown above the table
    pub error: Option<&'a str>,
    pub service_worker: bool,
}

impl<'a> Page<'a> {
    pub fn new(title: &'a str, table: &'a TableBody) -> Self {
        Self {
            title,
            table,
            field: SortField::default(),
            direction: SortDirection::default(),
            chart: None,
            error: None,
            service_worker: false,
        }
    }

    pub fn with_sort(mut self, field: SortField, direction: SortDirection) -> Self {
        self.field = field;
        self.direction = direction;
        self
    }

    pub fn with_chart(mut self, svg: &'a str) -> Self {
        self.chart = Some(svg);
        self
    }

    pub fn with_error(mut self, message: &'a str) -> Self {
        self.error = Some(message);
        self
    }

    pub fn with_service_worker(mut self, enabled: bool) -> Self {
        self.service_worker = enabled;
        self
    }

    /// Sort controls: field selector and direction toggle
    fn controls_html(&self) -> String {
        let mut html = String::from("<div class=\"controls\">\n<form method=\"get\" action=\"/\">\n");
        html.push_str("<label for=\"sort-select\">Sort by</label>\n");
        html.push_str(
            "<select id=\"sort-select\" name=\"sort\" onchange=\"this.form.submit()\">\n",
        );
        for field in COLUMNS {
            let selected = if field == self.field { " selected" } else { "" };
            let _ = writeln!(
                html,
                "<option value=\"{}\"{}>{}</option>",
                field.as_str(),
                selected,
                escape_html(field.label())
            );
        }
        html.push_str("</select>\n");
        let _ = writeln!(
            html,
            "<input type=\"hidden\" name=\"dir\" value=\"{}\">",
            self.direction.as_str()
        );
        html.push_str("<noscript><button type=\"submit\">Sort</button></noscript>\n</form>\n");
        let _ = writeln!(
            html,
            "<a id=\"sort-direction\" href=\"/?sort={}&amp;dir={}\">{}</a>",
            self.field.as_str(),
            self.direction.toggled().as_str(),
            self.direction.label()
        );
        html.push_str("</div>");
        html
    }

    pub fn render(&self) -> String {
        let mut html = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"utf-8\">\n");
        let _ = writeln!(html, "<title>{}</title>", escape_html(self.title));
        html.push_str(STYLE);
        html.push_str("\n</head>\n<body>\n");
        let _ = writeln!(html, "<h1>{}</h1>", escape_html(self.title));

        if let Some(error) = self.error {
            let _ = writeln!(
                html,
                "<div class=\"error\" role=\"alert\">Failed to load data: {}</div>",
                escape_html(error)
            );
        }

        html.push_str(&self.controls_html());
        html.push('\n');
        html.push_str(&self.table.to_table_html("solar-system-table"));
        html.push('\n');

        if let Some(chart) = self.chart {
            html.push_str("<div id=\"solar-system-chart\">\n");
            html.push_str(chart.trim_end());
            html.push_str("\n</div>\n");
        }

        if self.service_worker {
            html.push_str(REGISTER_WORKER_JS);
            html.push('\n');
        }

        html.push_str("</body>\n</html>\n");
        html
    }
}
