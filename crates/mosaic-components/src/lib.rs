//! Built-in components for mosaic sites.
//!
//! Every component escapes the data it is given and ships a CSS block scoped
//! to its own class names. [`Carousel`], [`Form`] and [`Navbar`] also ship
//! a script.
//! All of them deserialize from the site manifest with field defaults.

pub mod banner;
pub mod card;
pub mod carousel;
pub mod contact_form;
pub mod doctor_card;
pub mod footer;
pub mod form;
pub mod hero;
pub mod navbar;
pub mod package_card;
pub mod parts;
pub mod post_card;
pub mod raw;
pub mod section_head;
pub mod service_card;

pub use banner::{Banner, BannerKind};
pub use card::Card;
pub use carousel::{Carousel, CarouselImage};
pub use contact_form::ContactForm;
pub use doctor_card::DoctorCard;
pub use footer::{Footer, FooterColumn, FooterContent, SocialLink};
pub use form::{Form, FormField};
pub use hero::Hero;
pub use navbar::{NavItem, Navbar};
pub use package_card::PackageCard;
pub use parts::{Button, Link};
pub use post_card::PostCard;
pub use raw::{RawHtml, Script, Stylesheet};
pub use section_head::SectionHead;
pub use service_card::ServiceCard;

#[cfg(test)]
mod tests {
    use super::*;
    use mosaic_site::{MemorySink, Site, SiteConfig};

    #[test]
    fn shared_component_css_is_bundled_once() {
        let mut site = Site::new(SiteConfig::new("Clinic", "dist"));
        site.new_page("Home", "index.html")
            .new_section("Services")
            .add(Card::new("Checkups", "Yearly"))
            .add(Card::new("Vaccines", "All ages"))
            .add(Carousel::new(vec![CarouselImage::new("a.jpg", "A")]));
        site.new_page("Contact", "contact.html")
            .new_section("Contact Us")
            .add(Card::new("Phone", "555"))
            .add(Form::new("/send"));

        let mut sink = MemorySink::new();
        let summary = site.generate(&mut sink).unwrap();

        assert_eq!(summary.css_blocks, 3);
        assert_eq!(summary.js_blocks, 2);

        let css = sink.get("style.css").unwrap();
        assert_eq!(css.matches(".card h3").count(), 1);
        let js = sink.get("script.js").unwrap();
        assert!(js.find("Carousel").unwrap() < js.find("Required-field").unwrap());
    }
}
