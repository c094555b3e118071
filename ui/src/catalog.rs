//! Curated link catalog rendered on the landing page.
//!
//! All content is `static`: records are never created, changed or removed at
//! runtime, and slice order is display order.

/// One curated external resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkRecord {
    pub title: &'static str,
    pub description: &'static str,
    /// Absolute address of the resource. Not validated.
    pub target: &'static str,
}

impl LinkRecord {
    pub const fn new(
        title: &'static str,
        description: &'static str,
        target: &'static str,
    ) -> Self {
        Self {
            title,
            description,
            target,
        }
    }
}

/// A named, ordered collection of records shown under one heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Group {
    pub title: &'static str,
    pub description: &'static str,
    pub links: &'static [LinkRecord],
}

impl Group {
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

pub const WEB_APPS: &[LinkRecord] = &[
    LinkRecord::new("Monroe™", "Create digital pop art", "https://www.monroe.art"),
    LinkRecord::new(
        "Meme Maker",
        "Make and share memes easily",
        "https://www.makememes.co",
    ),
    LinkRecord::new(
        "Code Tutor",
        "Learn what your ai-composed code does",
        "https://www.codeclarity.app",
    ),
];

pub const COMMUNITIES: &[LinkRecord] = &[
    LinkRecord::new(
        "Higher",
        "27,000 members. 100,000+ holders",
        "https://www.aimhigher.net",
    ),
    LinkRecord::new(
        "Someone Build",
        "4,000+ members sharing business ideas",
        "https://warpcast.com/~/channel/someone-build",
    ),
    LinkRecord::new(
        "The Walking Club",
        "60 members that love walking",
        "https://warpcast.com/~/channel/thewalkingclub",
    ),
];

pub const PAPERS: &[LinkRecord] = &[
    LinkRecord::new(
        "Hypercultures",
        "Breakout paper on digital culture",
        "https://lght.mirror.xyz/Av_4Vx1U9jDYgDzdrfWQD3FKuXUbMpQ9h5n-KlFz3KQ",
    ),
    LinkRecord::new(
        "Memetics",
        "Market research on novel meme primitives",
        "https://lght.mirror.xyz/PyVamFjuDpQIOKMe9jB4JDSlJu11go14L-PbCIUlfSg",
    ),
    LinkRecord::new(
        "Founding Higher Network",
        "Initial accounting of the experiment",
        "https://lght.mirror.xyz/sj2ZD56v80Dk51VEVFrtoK63eBMQMfo0e6p0IDQQRog",
    ),
    LinkRecord::new(
        "Left Curving DAOs I & II",
        "Proposing an innovation on global-scale coordination",
        "https://lght.mirror.xyz/zgnQyci9HqYQ8KTRcomh2_CCDepcwqrigCFQZFQz5QA",
    ),
    LinkRecord::new(
        "Technocapitalism",
        "Repurposing the term for the crypto industry",
        "https://lght.mirror.xyz/EnqAVNDoVu3nhUJ_RRgxWn4m8QikD1ATT7v9gi04QZ8",
    ),
    LinkRecord::new(
        "Explaining Higher Network",
        "The whitepaper after 7+ months of scaling the network",
        "https://lght.mirror.xyz/QmhfjvR_Ug-XGbTeybBCfST4_JWqDfyvdTu96yZHgHA",
    ),
];

pub const BRANDS: &[LinkRecord] = &[
    LinkRecord::new("Higher", "Crypto x AI x DAO", "https://aimhigher.net"),
    LinkRecord::new("Stuff", "Sensory Project", "https://www.stuff.lol"),
    LinkRecord::new("Yena", "Focused on world computers", "https://www.yena.co"),
];

static GROUPS: [Group; 4] = [
    Group {
        title: "Web Apps",
        description: "Interactive digital experiences",
        links: WEB_APPS,
    },
    Group {
        title: "Communities",
        description: "Active networks and spaces",
        links: COMMUNITIES,
    },
    Group {
        title: "Papers",
        description: "Published research and thought pieces",
        links: PAPERS,
    },
    Group {
        title: "Brands",
        description: "Founded and built",
        links: BRANDS,
    },
];

/// All groups in display order.
pub fn groups() -> &'static [Group] {
    &GROUPS
}

/// Look up a group by its exact title.
pub fn group(title: &str) -> Option<&'static Group> {
    GROUPS.iter().find(|g| g.title == title)
}
