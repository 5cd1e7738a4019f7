use crate::controller::View;

pub fn render_index(view: &View) -> String {
    let message_class = if view.message.is_some() { "message" } else { "message hidden" };
    let button_class = if view.done_style { "gift done" } else { "gift" };
    let button_state = if view.trigger_enabled { "" } else { "disabled" };

    fill(INDEX_HTML, |name| match name {
        "BUTTON_CLASS" => Some(button_class.to_string()),
        "BUTTON_STATE" => Some(button_state.to_string()),
        "MESSAGE_CLASS" => Some(message_class.to_string()),
        "VIEW_JSON" => Some(view_json(view)),
        "STATUS" => Some(escape_html(&view.status)),
        "MESSAGE" => Some(escape_html(view.message.as_deref().unwrap_or_default())),
        _ => None,
    })
}

/// Substitutes `{{NAME}}` placeholders in one pass. Inserted values are never
/// rescanned; unknown names are left as written.
fn fill(template: &str, value: impl Fn(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            rest = &rest[start..];
            break;
        };
        match value(&after[..end]) {
            Some(text) => out.push_str(&text),
            None => out.push_str(&rest[start..start + end + 4]),
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    out
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
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

/// The view as a script literal; `</` is split so message text cannot close the tag.
fn view_json(view: &View) -> String {
    serde_json::to_string(view)
        .unwrap_or_else(|_| "null".to_string())
        .replace("</", "<\\/")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Advent Calendar</title>
  <style>
    :root {
      --red: #b3000c;
      --red-dark: #7a0008;
      --green: #165b33;
      --gold: #f8b229;
      --snow: #fdfcf7;
      --ink: #2b2a28;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      display: grid;
      place-items: center;
      padding: 32px 18px;
      background: radial-gradient(circle at top, #25543a, #0f2a1c 70%);
      color: var(--snow);
      font-family: "Trebuchet MS", sans-serif;
    }

    .app {
      width: min(520px, 100%);
      display: grid;
      gap: 24px;
      justify-items: center;
      text-align: center;
    }

    h1 {
      font-family: "Georgia", serif;
      font-size: clamp(2rem, 6vw, 2.8rem);
      margin: 0;
      color: var(--gold);
    }

    .date {
      font-size: 1.2rem;
      margin: 0;
      min-height: 1.5em;
    }

    .gift {
      width: 180px;
      height: 180px;
      border: none;
      border-radius: 24px;
      background: linear-gradient(145deg, var(--red), var(--red-dark));
      box-shadow: 0 18px 40px rgba(0, 0, 0, 0.35);
      color: var(--snow);
      font-size: 4rem;
      cursor: pointer;
      transition: transform 160ms ease, box-shadow 160ms ease;
    }

    .gift:hover:not(:disabled) {
      transform: translateY(-3px) rotate(-2deg);
    }

    .gift:disabled {
      cursor: default;
    }

    .gift.done {
      background: var(--green);
      box-shadow: none;
      transform: scale(0.95);
    }

    .message {
      background: rgba(253, 252, 247, 0.94);
      color: var(--ink);
      border-radius: 18px;
      padding: 20px 24px;
      font-size: 1.15rem;
      line-height: 1.5;
      animation: rise 500ms ease;
    }

    .hidden {
      display: none;
    }

    .menu {
      position: fixed;
      top: 16px;
      right: 16px;
      display: grid;
      justify-items: end;
      gap: 8px;
    }

    .menu > button {
      border: none;
      background: rgba(253, 252, 247, 0.15);
      color: var(--snow);
      border-radius: 12px;
      padding: 8px 12px;
      font-size: 1.2rem;
      cursor: pointer;
    }

    .menu-options {
      background: var(--snow);
      border-radius: 14px;
      padding: 8px;
      display: grid;
      gap: 4px;
      box-shadow: 0 12px 30px rgba(0, 0, 0, 0.3);
    }

    .menu-options.hidden {
      display: none;
    }

    .menu-options button {
      width: 100%;
      border: none;
      background: transparent;
      color: var(--ink);
      text-align: left;
      padding: 8px 12px;
      border-radius: 10px;
      font: inherit;
      cursor: pointer;
    }

    .menu-options button:hover {
      background: #f0ebe0;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(12px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }
  </style>
</head>
<body>
  <nav class="menu">
    <button id="menuButton" type="button" aria-label="Menu">&#9776;</button>
    <div id="menuOptions" class="menu-options hidden">
      <form id="formResetCalendar" method="post" action="/menu/reset-calendar">
        <input type="hidden" name="confirm" value="true" />
        <button id="btnResetCalendar" type="submit">Reset calendar</button>
      </form>
      <form id="formResetDay" method="post" action="/menu/reset-day">
        <input type="hidden" name="confirm" value="true" />
        <button id="btnResetDay" type="submit">Reset today</button>
      </form>
      <form method="get" action="/menu/used">
        <button id="btnPrintUsed" type="submit">Show used messages</button>
      </form>
    </div>
  </nav>

  <main class="app">
    <h1>Advent Calendar</h1>
    <p id="dateText" class="date">{{STATUS}}</p>
    <form id="giftForm" method="post" action="/gift/open">
      <button id="adventButton" class="{{BUTTON_CLASS}}" type="submit" {{BUTTON_STATE}}>&#127873;</button>
    </form>
    <div id="message" class="{{MESSAGE_CLASS}}">{{MESSAGE}}</div>
  </main>

  <script>
    const VIEW = {{VIEW_JSON}};
    const NOT_OPENED_TODAY = "You haven't opened a gift today yet!";

    const button = document.getElementById('adventButton');
    const dateText = document.getElementById('dateText');
    const messageDisplay = document.getElementById('message');

    function pulse(ms) {
      if (ms && navigator.vibrate) {
        navigator.vibrate(ms);
      }
    }

    function apply(view) {
      dateText.textContent = view.status;
      button.disabled = !view.trigger_enabled;
      button.classList.toggle('done', view.done_style);
      if (view.message) {
        messageDisplay.textContent = view.message;
        messageDisplay.classList.remove('hidden');
      }
      VIEW.phase = view.phase;
      pulse(view.vibrate_ms);
      if (view.alert) {
        alert(view.alert);
      }
    }

    document.getElementById('giftForm').addEventListener('submit', async (event) => {
      event.preventDefault();
      if (!VIEW.trigger_armed) {
        return;
      }
      button.disabled = true;
      dateText.textContent = 'Opening...';
      try {
        const res = await fetch('/api/open', { method: 'POST' });
        apply(await res.json());
      } catch (err) {
        console.error('Error opening gift:', err);
        dateText.textContent = 'Error!';
        button.disabled = false;
        alert('Oops! Something went wrong. Please try again.');
      }
    });

    document.getElementById('menuButton').addEventListener('click', () => {
      document.getElementById('menuOptions').classList.toggle('hidden');
    });

    document.getElementById('formResetCalendar').addEventListener('submit', (event) => {
      if (!confirm('Are you sure you want to reset the ENTIRE calendar? This will clear all history.')) {
        event.preventDefault();
      }
    });

    document.getElementById('formResetDay').addEventListener('submit', (event) => {
      if (VIEW.phase !== 'opened') {
        event.preventDefault();
        alert(NOT_OPENED_TODAY);
        return;
      }
      if (!confirm('Reset today? The gift will be put back in the pile.')) {
        event.preventDefault();
      }
    });

    window.resetAdvent = async () => {
      await fetch('/api/test/reset-advent', { method: 'POST' });
      console.log('Advent calendar state for today reset!');
      location.reload();
    };

    window.addEventListener('load', () => {
      pulse(VIEW.vibrate_ms);
      if (VIEW.alert) {
        alert(VIEW.alert);
      }
    });
  </script>
</body>
</html>
"#;
