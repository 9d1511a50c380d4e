//! Static HTML report: a single self-contained document with three
//! searchable relation sections. No external resources are loaded; styling
//! and the filter script live in module-level constants, and filtering is a
//! substring match on the lowercased username, entirely client-side.
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::follow::{Relation, RelationRow};
use crate::stats::{AuditStats, subset};

pub const HTML_STYLE: &str = r#"
body{font-family:system-ui,Arial,sans-serif;max-width:1100px;margin:24px auto;padding:0 12px}
h1{font-size:22px}
h2{font-size:18px;margin-top:24px}
.summary{padding:10px 12px;border:1px solid #ddd;border-radius:10px;background:#fafafa}
.grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(320px,1fr));gap:18px}
section.card{border:1px solid #e4e4e4;border-radius:14px;padding:12px 14px;background:#fff;box-shadow:0 1px 2px rgba(0,0,0,.04)}
ul.cols{
  display:grid;
  grid-template-columns:repeat(auto-fill,minmax(220px,1fr));
  gap:10px;
  list-style:none;
  padding:0;
  margin:0;
}
ul.cols li{
  direction:ltr;
  white-space:nowrap;
  overflow:hidden;
  text-overflow:ellipsis;
  line-height:1.35;
  padding:6px 8px;
  border-radius:8px;
  background:#f9f9f9;
  border:1px solid #eee;
}
ul.cols li a{
  text-decoration:none;
}
.badge{display:inline-block;font-size:12px;padding:2px 8px;border-radius:999px;border:1px solid #ddd;background:#fff;margin-right:6px}
.search{margin:10px 0}
input[type="search"]{width:100%;padding:8px 10px;border:1px solid #ccc;border-radius:10px}
.hidden{display:none}
.small{color:#666;font-size:12px}
"#;

pub const HTML_SCRIPT: &str = r#"
<script>
function setupFilter(sectionId){
  const input = document.querySelector('#'+sectionId+' input[type=search]');
  const lis = document.querySelectorAll('#'+sectionId+' li');
  input.addEventListener('input', function(){
    const q = this.value.toLowerCase();
    let shown = 0;
    lis.forEach(li => {
      const u = (li.getAttribute('data-u') || '').toLowerCase();
      const show = u.includes(q);
      li.style.display = show ? '' : 'none';
      if(show) shown++;
    });
    const count = document.querySelector('#'+sectionId+' .count');
    if(count) count.innerText = shown;
  });
}

['you_follow_they_do_not','they_follow_you_only','mutual'].forEach(setupFilter);
</script>
"#;

/// Minimal escaping for text nodes and attribute values.
fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// One card section: search box, live count, linked username list. Each
/// `<li>` carries `data-u` for the filter script.
fn list_section(section_id: &str, title: &str, items: &[&RelationRow]) -> String {
    let mut lis = String::new();
    for r in items {
        let u = escape_html(&r.username);
        lis.push_str(&format!(
            "<li data-u=\"{u}\"><a href=\"{href}\" target=\"_blank\">@{u}</a></li>",
            href = escape_html(&r.profile_url),
        ));
    }
    format!(
        concat!(
            "<section id=\"{id}\" class=\"card\">",
            "<div class=\"search\"><input type=\"search\" placeholder=\"Search by username...\"></div>",
            "<h2>{title} - <span class=\"count\">{count}</span></h2>",
            "<ul class=\"cols\">{lis}</ul>",
            "</section>"
        ),
        id = section_id,
        title = escape_html(title),
        count = items.len(),
        lis = lis,
    )
}

/// Render the whole report document.
pub fn render_report(title: &str, stats: &AuditStats, rows: &[RelationRow]) -> String {
    let you_not = subset(rows, Relation::YouFollowOnly);
    let they_not = subset(rows, Relation::TheyFollowOnly);
    let mutual = subset(rows, Relation::Mutual);

    let mut out = String::new();
    out.push_str("<!DOCTYPE html><html><head><meta charset='utf-8'>");
    out.push_str("<meta name='viewport' content='width=device-width, initial-scale=1'>");
    out.push_str(&format!("<title>{}</title>", escape_html(title)));
    out.push_str("<style>");
    out.push_str(HTML_STYLE);
    out.push_str("</style></head><body>");
    out.push_str(&format!("<h1>{}</h1>", escape_html(title)));
    out.push_str(&format!(
        concat!(
            "<div class='summary'>",
            "<span class='badge'>followers: {}</span>",
            "<span class='badge'>following: {}</span>",
            "<span class='badge'>mutual: {}</span>",
            "<span class='badge'>you follow - they do not: {}</span>",
            "<span class='badge'>they follow you only: {}</span>",
            "<div class='small'>Click any username to open their profile in a new tab</div>",
            "</div>"
        ),
        stats.followers_total,
        stats.following_total,
        stats.mutual,
        stats.you_follow_only,
        stats.they_follow_only,
    ));
    out.push_str("<div class='grid'>");
    out.push_str(&list_section(
        Relation::YouFollowOnly.as_str(),
        "You follow - they do not",
        &you_not,
    ));
    out.push_str(&list_section(
        Relation::TheyFollowOnly.as_str(),
        "They follow you - you do not follow back",
        &they_not,
    ));
    out.push_str(&list_section(Relation::Mutual.as_str(), "Mutual follows", &mutual));
    out.push_str("</div>");
    out.push_str(&format!(
        "<div class='small'>Generated {}</div>",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    ));
    out.push_str(HTML_SCRIPT);
    out.push_str("</body></html>");
    out
}

/// Write the report, overwriting any previous file of the same name.
pub fn save_report<P: AsRef<Path>>(
    path: P,
    title: &str,
    stats: &AuditStats,
    rows: &[RelationRow],
) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, render_report(title, stats, rows))
        .with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
