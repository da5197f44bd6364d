//! Server-side rendering of the roster page.

use crate::session::SessionView;

const HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Incremental Team Selector</title>
<style>
body { font-family: sans-serif; background: #f3f4f6; display: flex; flex-direction: column; align-items: center; padding: 1.5rem; }
h1 { color: #1f2937; }
form { margin-bottom: 1.5rem; }
textarea { width: 32rem; max-width: 100%; padding: .75rem; }
.error { color: #ef4444; font-size: .875rem; }
.teams { display: grid; grid-template-columns: repeat(auto-fill, minmax(14rem, 1fr)); gap: 1.5rem; width: 100%; max-width: 72rem; }
.team { background: #fff; padding: 1rem; border-radius: .375rem; box-shadow: 0 4px 6px rgba(0,0,0,.1); }
.team ul { list-style: none; padding: 0; }
.team li { padding: .25rem .5rem; border-bottom: 1px solid #e5e7eb; }
.team li:last-child { border-bottom: none; }
button { padding: .75rem 1.5rem; background: #22c55e; color: #fff; font-weight: 600; border: none; border-radius: .375rem; }
</style>
</head>
<body>
<h1>Incremental Team Selector</h1>
"#;

const SCRIPT: &str = r#"<script>
const box = document.getElementById("playerNames");
const count = document.getElementById("playerCount");
const sizeForm = document.getElementById("teamSizeForm");
const sizeNames = document.getElementById("teamSizeNames");
let sent = 0;
let queue = Promise.resolve();
box.addEventListener("input", () => {
  const seq = ++sent;
  const text = box.value;
  queue = queue.then(async () => {
    if (seq !== sent) return;
    const res = await fetch("/api/pending", {
      method: "POST",
      headers: { "content-type": "application/json" },
      body: JSON.stringify({ text }),
    });
    if (res.ok && seq === sent) {
      const body = await res.json();
      count.textContent = body.count;
    }
  }).catch(() => {});
});
sizeForm.addEventListener("submit", () => {
  sizeNames.value = box.value;
});
</script>
</body>
</html>
"#;

/// Renders the full page for a session snapshot
pub fn render_page(view: &SessionView) -> String {
    let pending_text = escape(&view.pending_text);
    let mut html = String::from(HEAD);

    html.push_str(r#"<form method="post" action="/players">"#);
    html.push_str(r#"<label for="playerNames">Enter Player Names (one per line):</label><br>"#);
    html.push_str(&format!(
        r#"<textarea id="playerNames" name="names" rows="10" placeholder="Enter player names, one per line">{}</textarea>"#,
        pending_text
    ));
    html.push_str(&format!(
        r#"<p><strong>Player Count:</strong> <span id="playerCount">{}</span></p>"#,
        view.pending_count
    ));
    if let Some(error) = &view.error {
        html.push_str(&format!(
            r#"<p class="error" id="errorMessage">{}</p>"#,
            escape(error)
        ));
    }
    html.push_str(r#"<button type="submit">Add Players</button></form>"#);

    // The names box is carried along so a size change never reverts unsent typing
    html.push_str(r#"<form method="post" action="/team-size" id="teamSizeForm">"#);
    html.push_str(&format!(
        r#"<input type="hidden" id="teamSizeNames" name="names" value="{}">"#,
        pending_text
    ));
    html.push_str(&format!(
        r#"<label for="teamSize">Team Size:</label> <input type="number" id="teamSize" name="team_size" value="{}"> <button type="submit">Set</button>"#,
        view.team_size
    ));
    html.push_str("</form>");

    if !view.teams.is_empty() {
        html.push_str(r#"<div class="teams">"#);
        for team in &view.teams {
            html.push_str(&format!(
                r#"<div class="team"><h2>{}</h2><ul>"#,
                escape(&team.label)
            ));
            for player in &team.players {
                html.push_str(&format!("<li>{}</li>", escape(player)));
            }
            html.push_str("</ul></div>");
        }
        html.push_str("</div>");
    }

    html.push_str(SCRIPT);
    html
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::TeamView;

    fn view() -> SessionView {
        SessionView {
            pending_text: String::new(),
            pending_count: 0,
            team_size: 5,
            error: None,
            teams: Vec::new(),
        }
    }

    #[test]
    fn empty_session_has_no_team_grid() {
        let html = render_page(&view());

        assert!(html.contains("Add Players"));
        assert!(html.contains(r#"<span id="playerCount">0</span>"#));
        assert!(html.contains(r#"value="5""#));
        assert!(!html.contains(r#"class="teams""#));
        assert!(!html.contains(r#"id="errorMessage""#));
    }

    #[test]
    fn teams_and_error_rendered() {
        let mut v = view();
        v.error = Some("The following names already exist: A".to_string());
        v.teams = vec![TeamView {
            label: "Team 1".to_string(),
            players: vec!["A".to_string(), "B".to_string()],
        }];

        let html = render_page(&v);

        assert!(html.contains("<h2>Team 1</h2>"));
        assert!(html.contains("<li>A</li><li>B</li>"));
        assert!(html.contains("The following names already exist: A"));
    }

    #[test]
    fn user_text_is_escaped() {
        let mut v = view();
        v.pending_text = "<script>x</script>".to_string();
        v.teams = vec![TeamView {
            label: "Team 1".to_string(),
            players: vec!["Tom & \"Jerry\"".to_string()],
        }];

        let html = render_page(&v);

        assert!(html.contains("&lt;script&gt;x&lt;/script&gt;</textarea>"));
        assert!(html.contains("<li>Tom &amp; &quot;Jerry&quot;</li>"));
    }

    #[test]
    fn team_size_form_carries_names_box() {
        let mut v = view();
        v.pending_text = "Ann\nBob".to_string();

        let html = render_page(&v);

        assert!(html.contains(r#"action="/team-size" id="teamSizeForm""#));
        assert!(html.contains(
            r#"<input type="hidden" id="teamSizeNames" name="names" value="Ann&#10;Bob">"#
        ));
        assert!(html.contains("seq === sent"));
    }
}
