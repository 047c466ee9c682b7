use crate::domain::Post;

/// Plain Markdown bullets: bold date, linked title, input order preserved.
pub fn render(posts: &[Post]) -> String {
    posts
        .iter()
        .map(|post| {
            format!(
                "- **{}**: [{}]({})",
                post.formatted_date, post.title, post.url
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullet_shape_and_order() {
        let mut a = Post::new("a".into());
        a.title = "First".into();
        a.formatted_date = "Mar 01, 2024".into();
        a.url = "https://blog.example.com/first".into();

        let mut b = Post::new("b".into());
        b.title = "Second".into();
        b.formatted_date = "Mar 02, 2024".into();
        b.url = "https://blog.example.com/second".into();

        assert_eq!(
            render(&[a, b]),
            "- **Mar 01, 2024**: [First](https://blog.example.com/first)\n\
             - **Mar 02, 2024**: [Second](https://blog.example.com/second)"
        );
    }
}
