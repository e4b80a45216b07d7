//! Static site content. Everything here is a load-time constant.

#[derive(Debug, PartialEq)]
pub struct GalleryImage {
    pub src: &'static str,
    pub is_wide: bool,
}

const fn wide(src: &'static str) -> GalleryImage {
    GalleryImage { src, is_wide: true }
}

const fn standard(src: &'static str) -> GalleryImage {
    GalleryImage { src, is_wide: false }
}

/// One service offering, shown in the hero slideshow, the card fan and its own detail view.
#[derive(Debug, PartialEq)]
pub struct Category {
    pub id: &'static str,
    pub slug: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub body: &'static str,
    pub hook: &'static str,
    pub cta: &'static str,
    pub header_image: Option<&'static str>,
    pub fan_image: Option<&'static str>,
    pub gallery: &'static [GalleryImage],
}

impl Category {
    /// Images live in a per-category folder: `/images/{id}/{file}`.
    pub fn asset_path(&self, file: &str) -> String {
        format!("/images/{}/{}", self.id, file)
    }

    pub fn header_src(&self) -> Option<String> {
        self.header_image.map(|file| self.asset_path(file))
    }

    pub fn fan_src(&self) -> Option<String> {
        self.fan_image.map(|file| self.asset_path(file))
    }

    pub fn gallery_src(&self, image: &GalleryImage) -> String {
        self.asset_path(image.src)
    }
}

pub static CATEGORIES: &[Category] = &[
    Category {
        id: "brand",
        slug: "brand-identity-campaign",
        title: "Brand Identity & Campaign",
        subtitle: "Visual Strategy",
        body: "We translate your positioning into a coherent visual language. From key visuals to full campaign rollouts, every asset is built to be recognised in a fraction of a second and remembered long after.",
        hook: "A brand is remembered by how it looks before it is understood by what it says.",
        cta: "Build your campaign",
        header_image: Some("header.jpg"),
        fan_image: Some("fan.jpg"),
        gallery: &[
            wide("01.jpg"),
            standard("02.jpg"),
            standard("03.jpg"),
            standard("04.jpg"),
            standard("05.jpg"),
            wide("06.jpg"),
        ],
    },
    Category {
        id: "hotel",
        slug: "hotel-hospitality",
        title: "Hotel & Hospitality",
        subtitle: "Stays Worth Booking",
        body: "Guests book a feeling, not a room. We use light and composition to make the experience of staying with you tangible before arrival, and we deliver formats ready for booking platforms, website and social.",
        hook: "Booking decisions are made in milliseconds. Make them count.",
        cta: "Elevate your property",
        header_image: Some("header.jpg"),
        fan_image: Some("fan.jpg"),
        gallery: &[
            wide("01.jpg"),
            standard("02.jpg"),
            standard("03.jpg"),
            wide("04.jpg"),
            standard("05.jpg"),
            standard("06.jpg"),
        ],
    },
    Category {
        id: "culinary",
        slug: "culinary-fine-dining",
        title: "Culinary & Fine Dining",
        subtitle: "Taste, Made Visible",
        body: "Texture, steam, the moment a plate lands on the table. We stage food and atmosphere so that your restaurant's craft reads instantly on every screen.",
        hook: "People eat with their eyes first.",
        cta: "Plan your shoot",
        header_image: Some("header.jpg"),
        fan_image: Some("fan.jpg"),
        gallery: &[
            standard("01.jpg"),
            standard("02.jpg"),
            wide("03.jpg"),
            standard("04.jpg"),
            standard("05.jpg"),
        ],
    },
    Category {
        id: "villa",
        slug: "luxury-villa-real-estate",
        title: "Luxury Villa & Real Estate",
        subtitle: "Spaces With Presence",
        body: "Architecture deserves more than wide-angle snapshots. We capture proportion, material and light so that a property sells its lifestyle, not just its floor plan.",
        hook: "Show the life, not the listing.",
        cta: "Present your property",
        header_image: Some("header.jpg"),
        fan_image: Some("fan.jpg"),
        gallery: &[
            wide("01.jpg"),
            wide("02.jpg"),
            standard("03.jpg"),
            standard("04.jpg"),
        ],
    },
    Category {
        id: "personal",
        slug: "personal-branding",
        title: "Personal Branding",
        subtitle: "Experts Into Brands",
        body: "A personal brand is the visual promise of expertise. We frame your personality in a context of authority and style, from keynote portraits to high-end reels.",
        hook: "Your presence should match your market value.",
        cta: "Shape your brand",
        header_image: Some("header.jpg"),
        fan_image: Some("fan.jpg"),
        gallery: &[
            standard("01.jpg"),
            standard("02.jpg"),
            standard("03.jpg"),
            standard("04.jpg"),
            wide("05.jpg"),
        ],
    },
    Category {
        id: "ibiza",
        slug: "ibiza-events-venues",
        title: "Ibiza Events & Venues",
        subtitle: "Island Productions",
        body: "Exclusive shooting slots for beach clubs, fine-dining restaurants and event organisers on Ibiza. Local crews, no travel planning, international standard.",
        hook: "The island sells itself. Your venue should too.",
        cta: "Book an Ibiza slot",
        header_image: Some("header.jpg"),
        fan_image: None,
        gallery: &[
            wide("01.jpg"),
            standard("02.jpg"),
            standard("03.jpg"),
        ],
    },
];

pub fn find_category(slug: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|category| category.slug == slug)
}

#[derive(Debug, PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
}

impl Testimonial {
    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }
}

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "The best creative partner in Germany! David always delivers top results. Thank you for the amazing work.",
        name: "Elena",
        role: "Founder",
    },
    Testimonial {
        quote: "You notice immediately that he has a professional eye and staged the product perfectly. Additionally, he impresses with a natural, polished, and professional presence.",
        name: "Thomas",
        role: "Marketing Manager",
    },
    Testimonial {
        quote: "David exceeded our expectations yet again! The videos are simply top-tier. The style and the edits are authentic and absolutely visually stunning.",
        name: "Julia",
        role: "Brand Partner",
    },
    Testimonial {
        quote: "Incredible! The entire team at OAKAGE thanks you for your dedication! We are extremely satisfied with your work, 10/10.",
        name: "Fabian",
        role: "Team OAKAGE",
    },
    Testimonial {
        quote: "David was super reliable, and the quality of the shots was top-notch. We were especially pleased with the additional assets he delivered on top. Absolutely recommended!",
        name: "Dominik",
        role: "E-Commerce Brand",
    },
];

#[derive(Debug, PartialEq)]
pub struct Stat {
    pub value: u32,
    pub suffix: &'static str,
    pub label: &'static str,
}

pub static STATS: &[Stat] = &[
    Stat { value: 300, suffix: "+", label: "Projects Delivered" },
    Stat { value: 150, suffix: "+", label: "Happy Clients" },
    Stat { value: 7, suffix: "", label: "Years Experience" },
    Stat { value: 100, suffix: "%", label: "Client Satisfaction" },
];

#[derive(Debug, PartialEq)]
pub struct ClientLogo {
    pub src: &'static str,
    pub alt: &'static str,
}

pub static CLIENT_LOGOS: &[ClientLogo] = &[
    ClientLogo { src: "/logos/1.png", alt: "Partner Logo 1" },
    ClientLogo { src: "/logos/2.png", alt: "Partner Logo 2" },
    ClientLogo { src: "/logos/3.png", alt: "Partner Logo 3" },
    ClientLogo { src: "/logos/4.png", alt: "Partner Logo 4" },
    ClientLogo { src: "/logos/5.png", alt: "Partner Logo 5" },
    ClientLogo { src: "/logos/6.png", alt: "Partner Logo 6" },
];

#[derive(Debug, PartialEq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub static FAQS: &[Faq] = &[
    Faq {
        question: "What sets ÆSTHETIX apart from a traditional content agency?",
        answer: "Most agencies deliver images; we create visual identities. We blend minimalist aesthetics with sales psychology, and our content is optimised to strengthen brand equity and measurably increase engagement. We don't produce filler material, we create strategic assets.",
    },
    Faq {
        question: "Why is professional visual storytelling crucial for hotels and luxury villas?",
        answer: "In the premium sector, booking decisions are made within milliseconds and purely visually. High-quality photography and cinematography convey exclusivity and trust. We use lighting and composition not just to show spaces but to make the feeling of staying there tangible, which directly increases your inquiry conversion rate.",
    },
    Faq {
        question: "Does ÆSTHETIX offer full-service productions in Ibiza?",
        answer: "Yes. We offer exclusive shooting slots for beach clubs, fine-dining restaurants and event organisers. Our local expertise removes complex travel planning for our clients while guaranteeing content at an international high-end level.",
    },
    Faq {
        question: "How does ÆSTHETIX transform a personal brand?",
        answer: "A personal brand is the visual promise of expertise. We frame your personality in a context of authority and style. From your first keynote to high-end reels, we make sure your digital presence matches your real market value.",
    },
    Faq {
        question: "Is the content optimized for paid ads (Google & Meta)?",
        answer: "Absolutely. Every piece of content is created with modern marketing metrics in mind. We focus on visual hooks and formats that perform in search and social campaigns, which minimises wasted reach and maximises the impact of your advertising budget.",
    },
    Faq {
        question: "How does collaboration on a brand campaign work?",
        answer: "We start with an in-depth analysis of your brand identity and develop a visual concept that connects with your audience. From the first sketch to the final export we guide the process with an uncompromising eye for detail.",
    },
];

#[derive(Debug, PartialEq)]
pub struct Value {
    pub title: &'static str,
    pub description: &'static str,
}

pub static VALUES: &[Value] = &[
    Value {
        title: "Excellence",
        description: "We never settle for good enough. Every project receives our full creative dedication and technical precision.",
    },
    Value {
        title: "Authenticity",
        description: "We capture the true essence of your brand, creating visuals that resonate because they are real.",
    },
    Value {
        title: "Partnership",
        description: "Your success is our success. We work alongside you as creative partners, not just service providers.",
    },
];

pub static SEGMENT_OPTIONS: &[&str] = &[
    "Brand Identity & Campaign",
    "Hotel & Hospitality",
    "Culinary & Fine Dining",
    "Luxury Villa & Real Estate",
    "Personal Branding",
    "Ibiza Event / Venue Slot",
];

pub static GOAL_OPTIONS: &[&str] = &[
    "Launching a new brand/product",
    "Rebranding & High-End Positioning",
    "Content for Ads & Conversion",
    "Capturing a specific Event",
];

pub static CHANNEL_OPTIONS: &[&str] = &[
    "Premium Website",
    "Social Media (Organic & Paid)",
    "Print & Billboards",
    "Investor / Sales Decks",
];

pub static BUDGET_OPTIONS: &[&str] = &[
    "2.500 € – 5.000 €",
    "5.000 € – 10.000 €",
    "10.000 € +",
    "To be discussed",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_paths_use_category_folder() {
        let hotel = find_category("hotel-hospitality").unwrap();
        assert_eq!(hotel.header_src().as_deref(), Some("/images/hotel/header.jpg"));
        assert_eq!(hotel.gallery_src(&hotel.gallery[0]), "/images/hotel/01.jpg");
    }

    #[test]
    fn missing_fan_image_yields_no_path() {
        let ibiza = find_category("ibiza-events-venues").unwrap();
        assert_eq!(ibiza.fan_src(), None);
    }

    #[test]
    fn unknown_slug_is_not_found() {
        assert!(find_category("wedding-photography").is_none());
    }

    #[test]
    fn ids_and_slugs_are_unique() {
        for (i, a) in CATEGORIES.iter().enumerate() {
            for b in &CATEGORIES[i + 1..] {
                assert_ne!(a.id, b.id);
                assert_ne!(a.slug, b.slug);
            }
        }
    }

    #[test]
    fn testimonial_initial_is_first_letter() {
        assert_eq!(TESTIMONIALS[0].initial(), "E");
    }
}
