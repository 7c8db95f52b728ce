use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::snapshot::PlaybackSnapshot;

pub const IDLE_BACKGROUND: &str = "radial-gradient(#222922, #000500)";
pub const IDLE_TITLE: &str = "No tracks";

/// Everything the SVG template needs.
#[derive(Debug, Clone, PartialEq)]
pub struct CardContext {
    /// CSS `background-image` value for `.card__img`.
    pub image_css: String,
    pub title: String,
    pub subtitle: String,
    pub external_link: String,
    pub playing: bool,
}

impl CardContext {
    pub fn idle() -> Self {
        Self {
            image_css: IDLE_BACKGROUND.to_string(),
            title: IDLE_TITLE.to_string(),
            subtitle: String::new(),
            external_link: "#".to_string(),
            playing: false,
        }
    }

    pub fn from_snapshot(snapshot: &PlaybackSnapshot) -> Self {
        let image_css = match &snapshot.album_image {
            Some(bytes) => image_data_css(bytes),
            None => IDLE_BACKGROUND.to_string(),
        };
        Self {
            image_css,
            title: snapshot.track_title.clone(),
            subtitle: snapshot.subtitle(),
            external_link: snapshot.external_link.clone(),
            playing: true,
        }
    }
}

impl From<Option<&PlaybackSnapshot>> for CardContext {
    fn from(snapshot: Option<&PlaybackSnapshot>) -> Self {
        snapshot.map_or_else(CardContext::idle, CardContext::from_snapshot)
    }
}

pub fn image_data_css(bytes: &[u8]) -> String {
    format!("url(data:image/png;base64,{})", STANDARD.encode(bytes))
}

/// Wrap text in CDATA. A literal `]]>` is split across two sections.
fn cdata(text: &str) -> String {
    format!("<![CDATA[{}]]>", text.replace("]]>", "]]]]><![CDATA[>"))
}

fn escape_attr(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}

pub fn render_card(ctx: &CardContext) -> String {
    format!(
        r#"<svg fill="none" viewBox="0 0 1000 250" width="1000" height="250" xmlns="http://www.w3.org/2000/svg">
  <foreignObject width="100%" height="100%">
    <div xmlns="http://www.w3.org/1999/xhtml">
      <style>
        * {{
          box-sizing: border-box;
          margin: 0;
          padding: 0;
        }}

        body {{
          background-color: #000;
        }}

        .external-link {{
          text-decoration: none;
          display: flex;
          width: 100%;
          height: 100%;
        }}

        .card {{
          display: flex;
          flex: 1;
          border-radius: 16px;
          box-shadow: 0 3px 1px -2px rgba(0, 0, 0, .2), 0 2px 2px 0 rgba(0, 0, 0, .14), 0 1px 5px 0 rgba(0, 0, 0, .12);
          background-color: #1e1e1e;
          height: 25vh;
          width: 100%;
        }}

        .card__img {{
          background-image: {image_css};
          background-repeat: no-repeat;
          background-size: cover;
          border-top-left-radius: 16px;
          border-bottom-left-radius: 16px;
          background-position: center;
          padding: 16px;
          width: 30%;
          min-width: 150px;
        }}

        .card__body {{
          display: flex;
          flex-direction: column;
          justify-content: center;
          align-items: flex-start;
          padding: 16px;
          width: 70%;
          border-top-right-radius: 16px;
          border-bottom-right-radius: 16px;
        }}

        .card__title {{
          font: 600 20px 'Segoe UI', Ubuntu, Sans-Serif;
          color: #ffffff;
          margin-bottom: 8px;
          white-space: nowrap;
          overflow: hidden;
          display: flex;
          width: 100%;
          justify-content: flex-start;
        }}

        .card__subtitle {{
          font: 400 16px 'Segoe UI', Ubuntu, Sans-Serif;
          color: #aaaaaa;
          white-space: nowrap;
          overflow: hidden;
          display: flex;
          width: 100%;
          justify-content: flex-start;
        }}

        .overlay {{
          background-image: linear-gradient(transparent 0%, rgba(30, 215, 96, 0.1) 50%);
          content: '';
          position: absolute;
          top: 0;
          left: 0;
          right: 0;
          bottom: 0;
        }}
      </style>
      <a class="external-link" href="{href}" target="_blank">
        <div class="card">
          <div class="card__img"></div>
          <div class="card__body">
            <div class="card__title">
              <span>{title}</span>
            </div>
            <div class="card__subtitle">
              <span>{subtitle}</span>
            </div>
          </div>
          <div class="{overlay}"></div>
        </div>
      </a>
    </div>
  </foreignObject>
</svg>"#,
        image_css = ctx.image_css,
        href = escape_attr(&ctx.external_link),
        title = cdata(&ctx.title),
        subtitle = cdata(&ctx.subtitle),
        overlay = if ctx.playing { "" } else { "overlay" },
    )
}
