use std::fs::File;

use cyberdev_portfolio::portfolio;
use cyberdev_portfolio::rss::build_channel;

/// Regenerates public/rss.xml from the built-in blog posts.
fn main() {
    let channel = build_channel(portfolio::posts());

    let file = File::create("public/rss.xml").expect("Should be able to create RSS feed file");
    channel
        .pretty_write_to(file, b' ', 2)
        .expect("Should be able to write RSS feed");
}
