//! Static copy and image manifest for the page sections

/// Image with its alt text. Paths are relative to the site root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Picture {
    pub src: &'static str,
    pub alt: &'static str,
}

pub const INTRO_IMAGE: Picture = Picture {
    src: "/images/intro-led-mic.jpg",
    alt: "Stand Up Comedy",
};

pub const HOME_MIC_IMAGE: Picture = Picture {
    src: "/images/mic.jpeg",
    alt: "Microphone",
};

/// Caption over the scan-effect transition
pub const COLLECTIVE_TAGLINE: &str = "Underground Comedy Collective";

/// Images of the pinned card gallery, in scroll order
pub const GALLERY_IMAGES: [Picture; 8] = [
    Picture {
        src: "/images/mic-person-stage.jpeg",
        alt: "Comedy scene 1",
    },
    Picture {
        src: "/images/person.jpeg",
        alt: "Comedy scene 2",
    },
    Picture {
        src: "/images/paris-theatre-sketch.jpg",
        alt: "Comedy scene 3",
    },
    Picture {
        src: "/images/audience.jpeg",
        alt: "Comedy scene 4",
    },
    Picture {
        src: "/images/people.jpeg",
        alt: "Comedy scene 5",
    },
    Picture {
        src: "/images/people1.jpeg",
        alt: "Comedy scene 6",
    },
    Picture {
        src: "/images/stand-up-comedy.jpg",
        alt: "Comedy scene 7",
    },
    Picture {
        src: "/images/intromic.webp",
        alt: "Comedy scene 8",
    },
];

/// Parallax card in the home section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureCard {
    pub picture: Picture,
    pub title: &'static str,
    pub tagline: &'static str,
    /// Which parallax track the card follows
    pub track: ParallaxTrack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParallaxTrack {
    /// Moves up as the section scrolls past
    Rising,
    /// Moves down as the section scrolls past
    Sinking,
}

impl ParallaxTrack {
    /// Vertical offset in px at the start and end of the section traversal
    pub fn range(&self) -> [f64; 2] {
        match self {
            ParallaxTrack::Rising => [100.0, -100.0],
            ParallaxTrack::Sinking => [-50.0, 50.0],
        }
    }
}

pub const FEATURE_CARDS: [FeatureCard; 4] = [
    FeatureCard {
        picture: Picture {
            src: "/images/audience.jpeg",
            alt: "Comedy audience",
        },
        title: "FEEL THE ENERGY",
        tagline: "Every night is electric ⚡",
        track: ParallaxTrack::Rising,
    },
    FeatureCard {
        picture: Picture {
            src: "/images/mic-person.jpeg",
            alt: "Comedian performing",
        },
        title: "RAW TALENT",
        tagline: "Unscripted. Unfiltered. Unstoppable. 🎤",
        track: ParallaxTrack::Sinking,
    },
    FeatureCard {
        picture: Picture {
            src: "/images/people.jpeg",
            alt: "Comedy crowd",
        },
        title: "JOIN THE COLLECTIVE",
        tagline: "Where strangers become friends 🤝",
        track: ParallaxTrack::Sinking,
    },
    FeatureCard {
        picture: Picture {
            src: "/images/stage.jpeg",
            alt: "Comedy stage",
        },
        title: "THE SPOTLIGHT AWAITS",
        tagline: "Your moment to shine ✨",
        track: ParallaxTrack::Rising,
    },
];

/// Catchphrase card with its gradient stops
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catchphrase {
    pub text: &'static str,
    pub from: &'static str,
    pub to: &'static str,
}

pub const CATCHPHRASES: [Catchphrase; 4] = [
    Catchphrase {
        text: "Where Jokes Hit Different",
        from: "#ff0055",
        to: "#ff6b9d",
    },
    Catchphrase {
        text: "Laughter Is Our Language",
        from: "#00eaff",
        to: "#0099cc",
    },
    Catchphrase {
        text: "Underground. Unfiltered. Unforgettable.",
        from: "#ffaa00",
        to: "#ff6600",
    },
    Catchphrase {
        text: "Raw Comedy, Real Vibes",
        from: "#00ff88",
        to: "#00cc66",
    },
];

/// One word of the pinned list and the slide it reveals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub word: &'static str,
    pub picture: Picture,
    pub tagline: &'static str,
}

pub const SLIDES: [Slide; 4] = [
    Slide {
        word: "FEEL THE",
        picture: Picture {
            src: "/images/audience.jpeg",
            alt: "Comedy audience feeling the energy",
        },
        tagline: "Every night is electric ⚡",
    },
    Slide {
        word: "ENERGY",
        picture: Picture {
            src: "/images/mic-person.jpeg",
            alt: "Comedian with raw energy",
        },
        tagline: "Unscripted. Unfiltered. Unstoppable. 🎤",
    },
    Slide {
        word: "RAW",
        picture: Picture {
            src: "/images/people.jpeg",
            alt: "Join the collective",
        },
        tagline: "Where strangers become friends 🤝",
    },
    Slide {
        word: "TALENT",
        picture: Picture {
            src: "/images/stage.jpeg",
            alt: "The spotlight awaits",
        },
        tagline: "Your moment to shine ✨",
    },
];

/// Upcoming act in the lineup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Act {
    pub id: u32,
    pub name: &'static str,
    pub date: &'static str,
    pub picture: Picture,
}

pub const LINEUP: [Act; 4] = [
    Act {
        id: 1,
        name: "Sarah 'The Sledgehammer'",
        date: "OCT 12",
        picture: Picture {
            src: "/images/lineup-sledgehammer.jpg",
            alt: "Sarah 'The Sledgehammer'",
        },
    },
    Act {
        id: 2,
        name: "Mike 'Mic Drop'",
        date: "OCT 15",
        picture: Picture {
            src: "/images/lineup-mic-drop.jpg",
            alt: "Mike 'Mic Drop'",
        },
    },
    Act {
        id: 3,
        name: "The Hecklers",
        date: "OCT 22",
        picture: Picture {
            src: "/images/lineup-hecklers.jpg",
            alt: "The Hecklers",
        },
    },
    Act {
        id: 4,
        name: "Late Night Riot",
        date: "NOV 01",
        picture: Picture {
            src: "/images/lineup-late-night.jpg",
            alt: "Late Night Riot",
        },
    },
];

pub const MANIFESTO_QUOTE: &str =
    "\"Comedy is the art of making people laugh without making them puke.\"";
pub const MANIFESTO_ATTRIBUTION: &str = "— Steve Martin (Probably)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        label: "Instagram",
        href: "https://instagram.com/",
    },
    SocialLink {
        label: "Twitter",
        href: "https://twitter.com/",
    },
    SocialLink {
        label: "YouTube",
        href: "https://youtube.com/",
    },
    SocialLink {
        label: "Email Us",
        href: "mailto:hello@punchline.comedy",
    },
];

pub const GALLERY_COPY: [&str; 8] = [
    "Experience the energy, the talent, and the unforgettable moments that make Laugh Riot \
     the ultimate comedy destination. From intimate open mic nights to sold-out shows, \
     every performance is a celebration of laughter and creativity.",
    "Our stage has hosted some of the most talented comedians in the industry, each bringing \
     their unique voice and perspective. Whether you're here for observational humor, \
     improv comedy, or bold social commentary, you'll find it all at Laugh Riot.",
    "Join us for an evening where strangers become friends, where laughter breaks down barriers, \
     and where every joke lands perfectly. This isn't just a comedy club. It's a movement.",
    "Our community is built on the foundation of authentic humor and genuine connection. \
     We believe comedy has the power to unite people, challenge perspectives, and create \
     lasting memories that go far beyond the punchline.",
    "From our state-of-the-art sound system to our intimate seating arrangements, every detail \
     is designed to enhance your experience. We've created a space where comedians can thrive \
     and audiences can fully immerse themselves in the art of stand-up.",
    "Whether you're a comedy veteran or experiencing live stand-up for the first time, \
     Laugh Riot welcomes you with open arms. Our diverse lineup ensures there's something \
     for everyone, from clean family-friendly shows to late-night adult comedy.",
    "The spotlight is waiting. The microphone is ready. The audience is eager. \
     All that's missing is you. Come be part of the laughter, the energy, and the magic \
     that happens when comedy comes alive.",
    "Laugh Riot isn't just about watching comedy. It's about experiencing it, living it, \
     and becoming part of a community that celebrates the power of laughter. \
     Join us and discover why we're more than just a comedy club. We're a revolution.",
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_gallery_has_eight_images() {
        assert_eq!(GALLERY_IMAGES.len(), 8);
        assert!(GALLERY_IMAGES.iter().all(|p| p.src.starts_with("/images/")));
    }

    #[test]
    fn test_slides_match_list_words() {
        let words: Vec<_> = SLIDES.iter().map(|s| s.word).collect();
        assert_eq!(words, ["FEEL THE", "ENERGY", "RAW", "TALENT"]);
    }

    #[test]
    fn test_lineup_ids_are_unique() {
        let ids: HashSet<u32> = LINEUP.iter().map(|a| a.id).collect();
        assert_eq!(ids.len(), LINEUP.len());
    }

    fn every_picture() -> Vec<Picture> {
        let mut pictures = vec![INTRO_IMAGE, HOME_MIC_IMAGE];
        pictures.extend(GALLERY_IMAGES);
        pictures.extend(FEATURE_CARDS.iter().map(|c| c.picture));
        pictures.extend(SLIDES.iter().map(|s| s.picture));
        pictures.extend(LINEUP.iter().map(|a| a.picture));
        pictures
    }

    #[test]
    fn test_every_image_is_listed_in_readme() {
        let readme = include_str!("../../README.md");
        for picture in every_picture() {
            let file = picture
                .src
                .strip_prefix("/images/")
                .unwrap_or_else(|| panic!("{} is outside /images", picture.src));
            assert!(
                readme.contains(&format!("- `{file}`")),
                "{file} missing from README asset list"
            );
        }
    }

    #[test]
    fn test_gallery_sources_are_unique() {
        let sources: HashSet<&str> = GALLERY_IMAGES.iter().map(|p| p.src).collect();
        assert_eq!(sources.len(), GALLERY_IMAGES.len());
    }

    #[test]
    fn test_parallax_tracks_are_opposite() {
        let [a0, a1] = ParallaxTrack::Rising.range();
        let [b0, b1] = ParallaxTrack::Sinking.range();
        assert!(a0 > a1);
        assert!(b0 < b1);
    }

    #[test]
    fn test_catchphrase_colors_are_hex() {
        for phrase in CATCHPHRASES {
            assert!(crate::core::Rgb::from_hex(phrase.from).is_ok());
            assert!(crate::core::Rgb::from_hex(phrase.to).is_ok());
        }
    }
}
