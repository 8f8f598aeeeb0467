use rss::{
    extension::atom::{AtomExtensionBuilder, Link},
    Channel, ChannelBuilder, GuidBuilder, ItemBuilder,
};

use crate::portfolio::BlogPost;

const SITE_URL: &str = "https://userinpeace.github.io";
const AUTHOR: &str = "Rahul Pawar <rahulpawar96110211@gmail.com>";

/// Builds the syndication feed for the blog teasers. The posts have no
/// standalone pages yet, so item links point at the ids the blog section
/// will use once it grows one.
pub fn build_channel(posts: &[BlogPost]) -> Channel {
    let items = posts
        .iter()
        .map(|post| {
            let link = format!("{SITE_URL}/blog/{}", post.id);
            let guid = GuidBuilder::default().value(&link).permalink(true).build();
            let pub_date = post
                .published_at
                .and_hms_opt(0, 0, 0)
                .expect("Midnight should exist for every post date")
                .and_utc()
                .to_rfc2822();
            ItemBuilder::default()
                .title(post.title.to_string())
                .description(post.excerpt.to_string())
                .author(AUTHOR.to_string())
                .pub_date(pub_date)
                .link(link)
                .guid(guid)
                .build()
        })
        .collect::<Vec<_>>();

    let mut atom_link = Link::default();
    atom_link.set_rel("self");
    atom_link.set_href(format!("{SITE_URL}/rss.xml"));
    atom_link.set_mime_type("application/rss+xml".to_string());

    ChannelBuilder::default()
        .title("CYBERDEV Blog")
        .description(
            "Dispatches on AI, quantum computing and cybersecurity from a cyberpunk-themed developer portfolio.",
        )
        .link(format!("{SITE_URL}/#blog"))
        .language("en-us".to_string())
        .ttl("60".to_string())
        .atom_ext(AtomExtensionBuilder::default().links(vec![atom_link]).build())
        .items(items)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio;

    #[test]
    fn feed_carries_every_teaser_post() {
        let channel = build_channel(portfolio::posts());
        assert_eq!(channel.items().len(), 3);

        let titles: Vec<_> = channel.items().iter().filter_map(|i| i.title()).collect();
        assert_eq!(
            titles,
            vec![
                "The Future of AI in Web Development",
                "Quantum Computing: Beyond Classical Limitations",
                "Cybersecurity in the Age of IoT",
            ]
        );
    }

    #[test]
    fn items_link_to_their_post_ids() {
        let channel = build_channel(portfolio::posts());
        for (item, post) in channel.items().iter().zip(portfolio::posts()) {
            let link = item.link().unwrap();
            assert!(link.ends_with(&format!("/blog/{}", post.id)), "{link}");
            assert_eq!(item.guid().map(|g| g.value()), Some(link));
        }
    }

    #[test]
    fn pub_dates_are_rfc2822_midnights() {
        let channel = build_channel(portfolio::posts());
        let first = channel.items()[0].pub_date().unwrap();
        assert_eq!(first, "Mon, 15 Jan 2024 00:00:00 +0000");
    }
}
