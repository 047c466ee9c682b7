use crate::config::SyncConfig;
use crate::domain::Post;

use super::escape;

/// One HTML table: header row, then a row per post with the description
/// under the linked title.
pub fn render(posts: &[Post], config: &SyncConfig) -> String {
    let mut out = String::from("<table>\n  <tr><th>Date</th><th>Image</th><th>Title</th></tr>\n");

    for post in posts {
        out.push_str(&format!(
            "  <tr>\n    <td>{date}</td>\n    \
             <td><a href=\"{url}\"><img src=\"{cover}\" alt=\"{title}\" \
             width=\"{w}\"></a></td>\n    \
             <td><a href=\"{url}\"><strong>{title}</strong></a><br>{desc}</td>\n  </tr>\n",
            date = escape(&post.formatted_date),
            url = escape(&post.url),
            cover = escape(&post.cover_image),
            title = escape(&post.title),
            w = config.image_width,
            desc = escape(&post.description),
        ));
    }

    out.push_str("</table>");
    out
}
