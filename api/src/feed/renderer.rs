//! Feed renderer
//!
//! Renders normalized posts to server-side HTML: the card grid, the detail
//! dialog, the standalone student page and the error pages.

use crate::domain::entities::{MediaAsset, Post};
use crate::feed::interaction::{
    mode_switch_command, CardPlayback, InteractionMode, Selection, HOVER_PLAY_DELAY,
    TOUCH_BREAKPOINT_PX,
};
use crate::feed::media::{
    card_poster, photo_or_placeholder, with_scheme, MediaKind, PLACEHOLDER,
    VIDEO_PREVIEW_POSTER, VIDEO_UNAVAILABLE_POSTER,
};

const SITE_TITLE: &str = "University Student Panel";

const STYLE: &str = r#"
.grid { display: grid; gap: 1rem; grid-template-columns: repeat(1, 1fr); }
@media (min-width: 640px) { .grid { grid-template-columns: repeat(2, 1fr); } }
@media (min-width: 768px) { .grid { grid-template-columns: repeat(3, 1fr); gap: 1.5rem; } }
@media (min-width: 1024px) { .grid { grid-template-columns: repeat(4, 1fr); } }
.card { position: relative; display: block; overflow: hidden; border-radius: .5rem; aspect-ratio: 3 / 4; }
.card img, .card video { width: 100%; height: 100%; object-fit: cover; }
.overlay { position: absolute; inset: 0; display: flex; flex-direction: column; justify-content: flex-end; padding: 1rem; color: #fff; background: linear-gradient(to top, rgba(0,0,0,.8), rgba(0,0,0,.5), transparent); opacity: 0; transition: opacity .3s; }
body[data-mode="touch"] .overlay, body[data-mode="pointer"] .card:hover .overlay { opacity: 1; }
.clamp-2 { display: -webkit-box; -webkit-line-clamp: 2; -webkit-box-orient: vertical; overflow: hidden; }
.backdrop { position: fixed; inset: 0; background: rgba(0,0,0,.6); }
dialog[open] { position: fixed; top: 5vh; max-width: 800px; max-height: 90vh; overflow-y: auto; }
.carousel { display: flex; overflow-x: auto; scroll-snap-type: x mandatory; }
.carousel figure { flex: 0 0 100%; scroll-snap-align: start; margin: 0; }
"#;

/// Applies the hover and viewport transitions to card videos in the browser
const SCRIPT_TEMPLATE: &str = r#"
(function () {
  var delay = __DELAY__, breakpoint = __BREAKPOINT__;
  function mode() { return window.innerWidth < breakpoint ? "touch" : "pointer"; }
  var onSwitch = { touch: "__TO_TOUCH__", pointer: "__TO_POINTER__" };
  function reset(v) { v.pause(); v.currentTime = 0; v.load(); }
  function play(v) { var p = v.play(); if (p) p.catch(function () {}); }
  function apply(next) {
    if (next === document.body.dataset.mode) return;
    document.body.dataset.mode = next;
    document.querySelectorAll(".card video").forEach(function (v) {
      if (onSwitch[next] === "play") { play(v); }
      else if (onSwitch[next] === "reset") { reset(v); }
    });
  }
  apply(mode());
  window.addEventListener("resize", function () { apply(mode()); });
  document.querySelectorAll(".card").forEach(function (card) {
    var video = card.querySelector("video"), timer = null;
    if (!video) return;
    card.addEventListener("mouseenter", function () {
      if (document.body.dataset.mode !== "pointer" || timer) return;
      timer = setTimeout(function () { timer = null; play(video); }, delay);
    });
    card.addEventListener("mouseleave", function () {
      if (document.body.dataset.mode !== "pointer") return;
      if (timer) { clearTimeout(timer); timer = null; }
      reset(video);
    });
  });
})();
"#;

/// Escape text for HTML bodies and quoted attribute values
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Name of the command a card gets when the viewport switches into `to`
fn switch_command_name(to: InteractionMode) -> &'static str {
    let from = match to {
        InteractionMode::Touch => InteractionMode::Pointer,
        InteractionMode::Pointer => InteractionMode::Touch,
    };
    mode_switch_command(from, to).map_or("none", |cmd| cmd.name())
}

/// The script corrects the server-side mode guess on load as well as on resize
fn page_script() -> String {
    SCRIPT_TEMPLATE
        .replace("__DELAY__", &HOVER_PLAY_DELAY.as_millis().to_string())
        .replace("__BREAKPOINT__", &TOUCH_BREAKPOINT_PX.to_string())
        .replace("__TO_TOUCH__", switch_command_name(InteractionMode::Touch))
        .replace("__TO_POINTER__", switch_command_name(InteractionMode::Pointer))
}

fn layout(title: &str, mode: InteractionMode, body: &str, script: bool) -> String {
    let mut buf = String::new();

    buf.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    buf.push_str("<meta charset=\"utf-8\">\n");
    buf.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    buf.push_str(&format!("<title>{}</title>\n", escape(title)));
    buf.push_str(&format!("<style>{}</style>\n", STYLE));
    buf.push_str("</head>\n");
    buf.push_str(&format!("<body data-mode=\"{}\">\n", mode));
    buf.push_str(&format!(
        "<header class=\"site-header\"><h1>{}</h1></header>\n",
        SITE_TITLE
    ));
    buf.push_str(body);
    if script {
        buf.push_str(&format!("<script>{}</script>\n", page_script()));
    }
    buf.push_str("</body>\n</html>\n");

    buf
}

/// Render the feed: the card grid plus the detail dialog when a post is selected
pub fn render_feed_page(posts: &[Post], selection: &Selection, mode: InteractionMode) -> String {
    let mut body = String::new();

    body.push_str("<main class=\"container\">\n");
    if posts.is_empty() {
        body.push_str("<p class=\"empty\">No talent posts yet.</p>\n");
    } else {
        body.push_str("<div class=\"grid\">\n");
        for post in posts {
            body.push_str(&render_card(post, mode));
        }
        body.push_str("</div>\n");
    }
    body.push_str("</main>\n");

    if let Some(post) = selection.current() {
        body.push_str(&render_detail_dialog(post));
    }

    layout(SITE_TITLE, mode, &body, true)
}

fn render_avatar(post: &Post, class: &str) -> String {
    if post.student_photo.has_url() {
        format!(
            "<img class=\"avatar {}\" src=\"{}\" alt=\"{}\">",
            class,
            escape(&post.student_photo.secure_url),
            escape(&post.name)
        )
    } else {
        format!(
            "<span class=\"avatar avatar-fallback {}\">{}</span>",
            class,
            escape(&post.initial())
        )
    }
}

fn render_video_error_handler() -> String {
    format!(
        "this.onerror=null;this.poster=&#39;{}&#39;",
        escape(VIDEO_UNAVAILABLE_POSTER)
    )
}

/// Render one grid card
pub fn render_card(post: &Post, mode: InteractionMode) -> String {
    let playback = CardPlayback::new(mode);
    let mut buf = String::new();

    buf.push_str(&format!(
        "<a class=\"card\" href=\"/?selected={}\" data-post-id=\"{}\">\n",
        escape(&urlencoding::encode(&post.id)),
        escape(&post.id)
    ));

    match post.lead_media() {
        Some(lead) if MediaKind::of(lead) == MediaKind::Image => {
            buf.push_str(&format!(
                "<img src=\"{}\" alt=\"{}\">\n",
                escape(&lead.secure_url),
                escape(&post.post_title)
            ));
        }
        Some(lead) => {
            let autoplay = if playback.is_playing() { " autoplay" } else { "" };
            buf.push_str(&format!(
                "<video src=\"{}\" loop muted playsinline preload=\"auto\"{} width=\"800\" height=\"600\" poster=\"{}\" onerror=\"{}\">Your browser does not support the video tag.</video>\n",
                escape(&lead.secure_url),
                autoplay,
                escape(card_poster(&post.talent_media)),
                render_video_error_handler()
            ));
        }
        None => {
            buf.push_str(&format!(
                "<img src=\"{}\" alt=\"No media available\">\n",
                PLACEHOLDER
            ));
        }
    }

    buf.push_str("<div class=\"overlay\">\n");
    buf.push_str(&format!(
        "<span class=\"badge\">{}</span>\n",
        escape(&post.category)
    ));
    buf.push_str(&format!("<h3>{}</h3>\n", escape(&post.post_title)));
    buf.push_str(&format!(
        "<div class=\"byline\">{}<p>{}</p></div>\n",
        render_avatar(post, "avatar-sm"),
        escape(&post.name)
    ));
    buf.push_str(&format!(
        "<p class=\"clamp-2\">{}</p>\n",
        escape(&post.description)
    ));
    buf.push_str("</div>\n</a>\n");

    buf
}

fn render_links(post: &Post) -> String {
    let mut buf = String::new();

    buf.push_str("<div class=\"links\">\n");
    for (kind, url) in post.present_links() {
        buf.push_str(&format!(
            "<a class=\"button link-{}\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>\n",
            kind,
            escape(&with_scheme(url)),
            kind.label()
        ));
    }
    buf.push_str("</div>\n");

    buf
}

fn render_carousel_item(index: usize, media: &MediaAsset) -> String {
    match MediaKind::of(media) {
        MediaKind::Image => format!(
            "<figure id=\"media-{}\"><img src=\"{}\" alt=\"Media {}\" width=\"800\" height=\"500\"></figure>\n",
            index + 1,
            escape(photo_or_placeholder(media)),
            index + 1
        ),
        MediaKind::Video => format!(
            "<figure id=\"media-{}\"><video src=\"{}\" controls autoplay loop muted poster=\"{}\" onerror=\"{}\">Your browser does not support the video tag.</video></figure>\n",
            index + 1,
            escape(&media.secure_url),
            escape(VIDEO_PREVIEW_POSTER),
            render_video_error_handler()
        ),
    }
}

fn render_carousel(media: &[MediaAsset]) -> String {
    let mut buf = String::new();

    buf.push_str("<div class=\"carousel\">\n");
    for (i, item) in media.iter().enumerate() {
        buf.push_str(&render_carousel_item(i, item));
    }
    buf.push_str("</div>\n");

    if media.len() > 1 {
        buf.push_str("<nav class=\"carousel-nav\">");
        for i in 1..=media.len() {
            buf.push_str(&format!("<a href=\"#media-{}\">{}</a>", i, i));
        }
        buf.push_str("</nav>\n");
    }

    buf
}

/// Render the modal detail view for one post
pub fn render_detail_dialog(post: &Post) -> String {
    let mut buf = String::new();

    buf.push_str("<a class=\"backdrop\" href=\"/\" aria-label=\"Close\"></a>\n");
    buf.push_str("<dialog open class=\"detail\">\n");
    buf.push_str("<a class=\"close\" href=\"/\">Close</a>\n");
    buf.push_str(&format!("<h2>{}</h2>\n", escape(&post.post_title)));
    buf.push_str(&format!(
        "<span class=\"badge\">{}</span>\n",
        escape(&post.category)
    ));

    buf.push_str("<section class=\"profile\">\n");
    buf.push_str(&render_avatar(post, "avatar-lg"));
    buf.push('\n');
    buf.push_str(&format!("<h3>{}</h3>\n", escape(&post.name)));
    buf.push_str(&format!("<p>{}</p>\n", escape(&post.department)));
    buf.push_str(&format!("<p>Batch: {}</p>\n", escape(&post.batch)));
    buf.push_str(&format!(
        "<p>Enrollment: {}</p>\n",
        escape(&post.enrollment_no)
    ));
    buf.push_str(&render_links(post));
    buf.push_str("</section>\n");

    buf.push_str("<section class=\"about\">\n");
    buf.push_str("<h4>Description</h4>\n");
    buf.push_str(&format!("<p>{}</p>\n", escape(&post.description)));
    buf.push_str("<h4>Media Gallery</h4>\n");
    buf.push_str(&render_carousel(&post.talent_media));
    buf.push_str("</section>\n");
    buf.push_str("</dialog>\n");

    buf
}

/// Render the standalone student page
pub fn render_student_page(post: &Post) -> String {
    let mut body = String::new();

    body.push_str("<main class=\"container student\">\n");
    body.push_str("<a class=\"back\" href=\"/\">Back to all students</a>\n");
    body.push_str(&format!(
        "<img class=\"hero\" src=\"{}\" alt=\"{}\">\n",
        escape(photo_or_placeholder(&post.student_photo)),
        escape(&post.name)
    ));
    body.push_str(&format!("<h1>{}</h1>\n", escape(&post.name)));
    body.push_str(&format!(
        "<p class=\"enrollment\">{}</p>\n",
        escape(&post.enrollment_no)
    ));

    body.push_str("<h2>Personal Information</h2>\n<dl>\n");
    for (label, value) in [
        ("Department", &post.department),
        ("Batch", &post.batch),
        ("Contact", &post.contact_number),
        ("Category", &post.category),
    ] {
        body.push_str(&format!(
            "<dt>{}:</dt><dd>{}</dd>\n",
            label,
            escape(value)
        ));
    }
    body.push_str("</dl>\n");

    body.push_str("<h2>Social Media</h2>\n");
    body.push_str(&render_links(post));

    body.push_str("<h2>Description</h2>\n");
    body.push_str(&format!("<p>{}</p>\n", escape(&post.description)));

    if !post.talent_media.is_empty() {
        body.push_str("<h2>Uploaded Media</h2>\n");
        body.push_str(&render_carousel(&post.talent_media));
    }
    body.push_str("</main>\n");

    let title = format!("{} | {}", post.name, SITE_TITLE);
    layout(&title, InteractionMode::Pointer, &body, false)
}

/// Render the not-found page
pub fn render_not_found() -> String {
    let body = "<main class=\"container not-found\">\n\
<h2>Student Not Found</h2>\n\
<p>The student you're looking for doesn't exist or has been removed.</p>\n\
<a class=\"button\" href=\"/\">Return to Student Panel</a>\n\
</main>\n";

    layout("Student Not Found", InteractionMode::Pointer, body, false)
}

/// Render the generic failure page
pub fn render_error_page() -> String {
    let body = "<main class=\"container error\">\n\
<h2>Something went wrong</h2>\n\
<p>Failed to fetch posts. Please try again later.</p>\n\
<a class=\"button\" href=\"/\">Return to Student Panel</a>\n\
</main>\n";

    layout("Error", InteractionMode::Pointer, body, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{media, sample_post};

    // ===== escape tests =====

    #[test]
    fn escape_special_characters() {
        assert_eq!(
            escape(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    // ===== render_feed_page tests =====

    #[test]
    fn feed_page_empty() {
        let result = render_feed_page(&[], &Selection::default(), InteractionMode::Pointer);

        assert!(result.contains("University Student Panel"));
        assert!(result.contains("No talent posts yet."));
        assert!(!result.contains("<dialog"));
    }

    #[test]
    fn feed_page_keeps_received_order() {
        let mut first = sample_post();
        first.post_title = "Zebra Dance".to_string();
        let mut second = sample_post();
        second.post_title = "Aardvark Art".to_string();

        let result = render_feed_page(
            &[first, second],
            &Selection::default(),
            InteractionMode::Pointer,
        );

        let zebra = result.find("Zebra Dance").unwrap();
        let aardvark = result.find("Aardvark Art").unwrap();
        assert!(zebra < aardvark);
    }

    #[test]
    fn feed_page_embeds_interaction_constants() {
        let result = render_feed_page(&[], &Selection::default(), InteractionMode::Touch);

        assert!(result.contains("<body data-mode=\"touch\">"));
        assert!(result.contains("var delay = 1000, breakpoint = 768;"));
    }

    #[test]
    fn feed_page_without_hint_corrects_mode_on_load() {
        let mut post = sample_post();
        post.talent_media = vec![media("a.mp4")];

        let result = render_feed_page(&[post], &Selection::default(), InteractionMode::Pointer);

        // Rendered for a wide viewport, so a narrow one must start playback from the script
        assert!(!result.contains(" autoplay "));
        assert!(result.contains("var onSwitch = { touch: \"play\", pointer: \"reset\" };"));
        assert!(result.contains("apply(mode());"));
        assert!(result.contains("if (onSwitch[next] === \"play\") { play(v); }"));
    }

    #[test]
    fn feed_page_rendered_for_touch_resets_on_wide_viewport() {
        let result = render_feed_page(&[], &Selection::default(), InteractionMode::Touch);

        assert!(result.contains("<body data-mode=\"touch\">"));
        assert!(result.contains("apply(mode());"));
        assert!(result.contains("else if (onSwitch[next] === \"reset\") { reset(v); }"));
    }

    #[test]
    fn feed_page_renders_selected_dialog() {
        let post = sample_post();
        let mut selection = Selection::default();
        selection.select(post.clone());

        let result = render_feed_page(&[post.clone()], &selection, InteractionMode::Pointer);

        assert!(result.contains("<dialog open class=\"detail\">"));
        assert!(result.contains(&format!("<h2>{}</h2>", post.post_title)));
    }

    // ===== render_card tests =====

    #[test]
    fn card_lead_video_waits_for_hover_on_pointer() {
        let mut post = sample_post();
        post.talent_media = vec![media("a.mp4"), media("b.jpg")];

        let result = render_card(&post, InteractionMode::Pointer);

        assert!(result.contains("<video src=\"a.mp4\" loop muted playsinline"));
        assert!(!result.contains("autoplay"));
        assert!(result.contains("poster=\"b.jpg\""));
    }

    #[test]
    fn card_lead_video_autoplays_on_touch() {
        let mut post = sample_post();
        post.talent_media = vec![media("a.mp4")];

        let result = render_card(&post, InteractionMode::Touch);

        assert!(result.contains(" autoplay "));
        assert!(result.contains("Video+Preview"));
        assert!(result.contains("Video+Unavailable"));
    }

    #[test]
    fn card_lead_image() {
        let mut post = sample_post();
        post.talent_media = vec![media("https://cdn.example.com/art.PNG")];

        let result = render_card(&post, InteractionMode::Pointer);

        assert!(result.contains("<img src=\"https://cdn.example.com/art.PNG\""));
        assert!(!result.contains("<video"));
    }

    #[test]
    fn card_without_media_uses_placeholder() {
        let mut post = sample_post();
        post.talent_media.clear();

        let result = render_card(&post, InteractionMode::Pointer);

        assert!(result.contains("<img src=\"/placeholder.svg\" alt=\"No media available\">"));
    }

    #[test]
    fn card_links_to_selection_and_escapes() {
        let mut post = sample_post();
        post.post_title = "<script>alert(1)</script>".to_string();

        let result = render_card(&post, InteractionMode::Pointer);

        assert!(result.contains(&format!("href=\"/?selected={}\"", post.id)));
        assert!(!result.contains("<script>alert(1)</script>"));
        assert!(result.contains("&lt;script&gt;"));
    }

    #[test]
    fn card_selection_link_encodes_id() {
        let mut post = sample_post();
        post.id = "a&b #c".to_string();

        let result = render_card(&post, InteractionMode::Pointer);

        assert!(result.contains("href=\"/?selected=a%26b%20%23c\""));
        assert!(result.contains("data-post-id=\"a&amp;b #c\""));
    }

    #[test]
    fn card_avatar_falls_back_to_initial() {
        let mut post = sample_post();
        post.name = "Ishaan Verma".to_string();
        post.student_photo = MediaAsset::default();

        let result = render_card(&post, InteractionMode::Pointer);

        assert!(result.contains("<span class=\"avatar avatar-fallback avatar-sm\">I</span>"));
    }

    // ===== render_detail_dialog tests =====

    #[test]
    fn dialog_shows_profile_fields() {
        let post = sample_post();

        let result = render_detail_dialog(&post);

        assert!(result.contains(&format!("<p>Batch: {}</p>", post.batch)));
        assert!(result.contains(&format!("<p>Enrollment: {}</p>", post.enrollment_no)));
        assert!(result.contains(&format!("<p>{}</p>", post.department)));
        assert!(result.contains("<h4>Media Gallery</h4>"));
        assert!(result.contains("href=\"/\">Close</a>"));
    }

    #[test]
    fn dialog_renders_only_present_links() {
        let mut post = sample_post();
        post.github_link = "https://github.com/someone".to_string();
        post.youtube_link = "youtube.com/@someone".to_string();
        post.linkedin_link.clear();
        post.instagram_link.clear();
        post.facebook_link.clear();

        let result = render_detail_dialog(&post);

        assert!(result.contains("href=\"https://github.com/someone\""));
        assert!(result.contains("href=\"https://youtube.com/@someone\""));
        assert!(!result.contains("LinkedIn"));
        assert!(!result.contains("Instagram"));
        assert!(!result.contains("Facebook"));
    }

    #[test]
    fn dialog_carousel_keeps_order_and_kinds() {
        let mut post = sample_post();
        post.talent_media = vec![media("a.mp4"), media("b.jpg")];

        let result = render_detail_dialog(&post);

        let video = result.find("<video src=\"a.mp4\" controls autoplay loop muted").unwrap();
        let image = result.find("<img src=\"b.jpg\" alt=\"Media 2\"").unwrap();
        assert!(video < image);
    }

    // ===== render_student_page tests =====

    #[test]
    fn student_page_sections() {
        let post = sample_post();

        let result = render_student_page(&post);

        assert!(result.contains("Back to all students"));
        assert!(result.contains("<h2>Personal Information</h2>"));
        assert!(result.contains(&format!("<dt>Contact:</dt><dd>{}</dd>", post.contact_number)));
        assert!(result.contains("<h2>Uploaded Media</h2>"));
        assert!(!result.contains("<script>"));
    }

    #[test]
    fn student_page_without_photo_uses_placeholder() {
        let mut post = sample_post();
        post.student_photo = MediaAsset::default();
        post.talent_media.clear();

        let result = render_student_page(&post);

        assert!(result.contains("<img class=\"hero\" src=\"/placeholder.svg\""));
        assert!(!result.contains("Uploaded Media"));
    }

    // ===== error pages =====

    #[test]
    fn not_found_page_offers_way_home() {
        let result = render_not_found();

        assert!(result.contains("Student Not Found"));
        assert!(result.contains("doesn&#39;t exist") || result.contains("doesn't exist"));
        assert!(result.contains("<a class=\"button\" href=\"/\">Return to Student Panel</a>"));
    }

    #[test]
    fn error_page_has_fixed_message() {
        let result = render_error_page();

        assert!(result.contains("Failed to fetch posts"));
    }
}
