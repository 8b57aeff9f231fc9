//! Static portfolio content.
//!
//! Everything the sections display that is not interface chrome: skills,
//! services, certifications, projects, work history and gallery images. The
//! data is plain `const` tables; bilingual fields are [`Text`] pairs, taken
//! from the translation dictionary where a key exists.
//!
//! Contact details and CV files are deployment-specific and live in
//! [`SiteConfig`](crate::config::SiteConfig) instead.

use crate::gallery::{Category, GalleryImage};
use crate::i18n::{Key, Text};

/// An in-page navigation target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavLink {
    /// Section id, without the `#`.
    pub anchor: &'static str,
    pub label: Key,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { anchor: "home", label: Key::NavHome },
    NavLink { anchor: "about", label: Key::NavAbout },
    NavLink { anchor: "services", label: Key::NavServices },
    NavLink { anchor: "skills", label: Key::NavSkills },
    NavLink { anchor: "gallery", label: Key::NavGallery },
    NavLink { anchor: "projects", label: Key::NavProjects },
    NavLink { anchor: "experience", label: Key::NavExperience },
    NavLink { anchor: "contact", label: Key::NavContact },
];

/// Links repeated in the footer.
pub const FOOTER_LINKS: &[NavLink] = &[
    NavLink { anchor: "about", label: Key::NavAbout },
    NavLink { anchor: "skills", label: Key::NavSkills },
    NavLink { anchor: "projects", label: Key::NavProjects },
    NavLink { anchor: "experience", label: Key::NavExperience },
    NavLink { anchor: "contact", label: Key::NavContact },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stat {
    pub value: &'static str,
    pub label: Key,
    pub description: Key,
}

pub const STATS: &[Stat] = &[
    Stat { value: "50+", label: Key::AboutStatProjectsLabel, description: Key::AboutStatProjects },
    Stat { value: "6+", label: Key::AboutStatCertificationsLabel, description: Key::AboutStatCertifications },
    Stat { value: "5", label: Key::AboutStatExperienceLabel, description: Key::AboutStatExperience },
    Stat { value: "100%", label: Key::AboutStatAchievementLabel, description: Key::AboutStatAchievement },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Highlight {
    pub title: Key,
    pub description: Key,
}

pub const ABOUT_HIGHLIGHTS: &[Highlight] = &[
    Highlight { title: Key::AboutDesignTitle, description: Key::AboutDesignDesc },
    Highlight { title: Key::AboutManufacturingTitle, description: Key::AboutManufacturingDesc },
    Highlight { title: Key::AboutProjectTitle, description: Key::AboutProjectDesc },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Skill {
    pub name: Text,
    /// Proficiency in percent.
    pub level: u8,
}

impl Skill {
    /// Bar tier used for styling: `expert` (90+), `advanced` (80+), `proficient`.
    pub fn tier(&self) -> &'static str {
        match self.level {
            90.. => "expert",
            80..=89 => "advanced",
            _ => "proficient",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkillCategory {
    pub title: Key,
    pub skills: &'static [Skill],
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: Key::SkillsAdvancedDesign,
        skills: &[
            Skill { name: Text::same("SolidWorks"), level: 95 },
            Skill { name: Text::same("AutoCAD"), level: 90 },
            Skill { name: Text::same("Blender 3D"), level: 80 },
        ],
    },
    SkillCategory {
        title: Key::SkillsEngineeringAnalysis,
        skills: &[
            Skill { name: Text::same("ANSYS FEA"), level: 92 },
            Skill { name: Key::SkillsStressAnalysis.text(), level: 90 },
            Skill { name: Key::SkillsMechanicalSystems.text(), level: 88 },
        ],
    },
    SkillCategory {
        title: Key::SkillsTechnicalDoc,
        skills: &[
            Skill { name: Key::SkillsEngineeringDrawings.text(), level: 95 },
            Skill { name: Key::SkillsAsmeStandards.text(), level: 93 },
            Skill { name: Key::SkillsIsoCompliance.text(), level: 93 },
        ],
    },
    SkillCategory {
        title: Key::SkillsProjectMgmt,
        skills: &[
            Skill { name: Key::SkillsStrategicPlanning.text(), level: 90 },
            Skill { name: Key::SkillsTeamLeadership.text(), level: 88 },
            Skill { name: Key::SkillsProcessOptimization.text(), level: 92 },
        ],
    },
    SkillCategory {
        title: Key::SkillsDigitalContent,
        skills: &[
            Skill { name: Key::SkillsVideoEditing.text(), level: 85 },
            Skill { name: Key::SkillsGraphicDesign.text(), level: 82 },
            Skill { name: Key::SkillsSocialMedia.text(), level: 88 },
        ],
    },
    SkillCategory {
        title: Key::SkillsProfessional,
        skills: &[
            Skill { name: Key::SkillsProblemSolving.text(), level: 95 },
            Skill { name: Key::SkillsCriticalThinking.text(), level: 92 },
            Skill { name: Key::SkillsCommunication.text(), level: 90 },
        ],
    },
];

/// A spoken language and proficiency.
pub const SPOKEN_LANGUAGES: &[(Key, Key)] = &[
    (Key::SkillsArabic, Key::SkillsArabicLevel),
    (Key::SkillsEnglish, Key::SkillsEnglishLevel),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Service {
    pub title: Key,
    pub description: Key,
    pub stat: Key,
    pub achievement: Key,
}

pub const SERVICES: &[Service] = &[
    Service {
        title: Key::ServicesAtsOptimized,
        description: Key::ServicesAtsDesc,
        stat: Key::ServicesAtsCount,
        achievement: Key::ServicesAtsAchievement,
    },
    Service {
        title: Key::ServicesCvOptimization,
        description: Key::ServicesCvDesc,
        stat: Key::ServicesCvRate,
        achievement: Key::ServicesCvValidation,
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Certification {
    pub title: Key,
    pub issuer: Key,
    pub description: Option<Key>,
    pub verified: bool,
}

/// Certifications listed under services, each with a description.
pub const SERVICE_CERTIFICATIONS: &[Certification] = &[
    Certification {
        title: Key::ServicesPmpTitle,
        issuer: Key::ServicesPmpIssuer,
        description: Some(Key::ServicesPmpDesc),
        verified: true,
    },
    Certification {
        title: Key::ServicesHrmTitle,
        issuer: Key::ServicesHrmIssuer,
        description: Some(Key::ServicesHrmDesc),
        verified: true,
    },
    Certification {
        title: Key::ServicesAtsAuditor,
        issuer: Key::ServicesAtsAuditorIssuer,
        description: Some(Key::ServicesAtsAuditorDesc),
        verified: true,
    },
];

pub const WHY_CHOOSE: &[Highlight] = &[
    Highlight { title: Key::ServicesCompatibleTitle, description: Key::ServicesCompatibleDesc },
    Highlight { title: Key::ServicesStoriesTitle, description: Key::ServicesStoriesDesc },
    Highlight { title: Key::ServicesExpertiseTitle, description: Key::ServicesExpertiseDesc },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Project {
    pub title: Key,
    pub description: Key,
    pub category: Text,
    pub technologies: &'static [&'static str],
    pub image: &'static str,
    pub link: Option<&'static str>,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: Key::ProjectsEngPlatform,
        description: Key::ProjectsEngDesc,
        category: Text::new("Educational Platform", "منصة تعليمية"),
        technologies: &["SolidWorks", "CAD Design", "Technical Documentation"],
        image: "/images/projects-showcase.jpg",
        link: None,
    },
    Project {
        title: Key::ProjectsSheSyria,
        description: Key::ProjectsSheDesc,
        category: Text::new("Community Project", "مشروع مجتمعي"),
        technologies: &["Project Management", "Community Building", "Leadership"],
        image: "/images/projects-showcase.jpg",
        link: None,
    },
    Project {
        title: Key::ProjectsSyriaMakers,
        description: Key::ProjectsSyriaDesc,
        category: Text::new("Innovation Hub", "مركز ابتكار"),
        technologies: &["Community Development", "Innovation", "Technology"],
        image: "/images/projects-showcase.jpg",
        link: None,
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Experience {
    pub title: Key,
    pub company: Key,
    pub description: Key,
    pub highlights: &'static [Key],
}

pub const EXPERIENCE: &[Experience] = &[
    Experience {
        title: Key::ExperiencePrecisionDesigner,
        company: Key::ExperienceProfiCar,
        description: Key::ExperiencePrecisionDesc,
        highlights: &[
            Key::ExperienceHighlightPrecision,
            Key::ExperienceHighlightQuality,
            Key::ExperienceHighlightManufacturing,
        ],
    },
    Experience {
        title: Key::ExperienceAutomotive,
        company: Key::ExperienceTrainingProgram,
        description: Key::ExperienceAutomotiveDesc,
        highlights: &[
            Key::ExperienceHighlightMaintenance,
            Key::ExperienceHighlightAluminum,
            Key::ExperienceHighlightIndustrial,
        ],
    },
    Experience {
        title: Key::ExperienceVisualContent,
        company: Key::ExperienceDigitalMarketing,
        description: Key::ExperienceVisualDesc,
        highlights: &[
            Key::ExperienceHighlightVideo,
            Key::ExperienceHighlightContent,
            Key::ExperienceHighlightSocial,
        ],
    },
    Experience {
        title: Key::ExperienceProjectLeader,
        company: Key::ExperienceMultipleProjects,
        description: Key::ExperienceLeaderDesc,
        highlights: &[
            Key::ExperienceHighlightLeadership,
            Key::ExperienceHighlightInnovation,
            Key::ExperienceHighlightTeam,
        ],
    },
];

pub const EXPERIENCE_CERTIFICATIONS: &[Certification] = &[
    Certification { title: Key::ExperienceSolidworks, issuer: Key::ExperienceEngineers, description: None, verified: false },
    Certification { title: Key::ExperienceMentorship, issuer: Key::ExperiencePmi, description: None, verified: false },
    Certification { title: Key::ExperienceEnglish, issuer: Key::ExperienceProficiency, description: None, verified: false },
    Certification { title: Key::ExperienceBusiness, issuer: Key::ExperienceScaleup, description: None, verified: false },
    Certification { title: Key::ExperienceAdvanced, issuer: Key::ExperienceDevelopment, description: None, verified: false },
    Certification { title: Key::ExperienceAutomotive2, issuer: Key::ExperienceNrc, description: None, verified: false },
];

pub const EDUCATION: &[Key] = &[Key::ExperienceMechanical, Key::ExperienceAward];

/// Gallery images, in display order.
pub fn gallery_images() -> Vec<GalleryImage> {
    vec![
        GalleryImage {
            id: "1",
            title: Text::new("Mechanical Engine Design", "تصميم محرك ميكانيكي"),
            description: Text::new(
                "Advanced mechanical engine design using SolidWorks with ANSYS stress and deformation analysis",
                "تصميم محرك ميكانيكي متقدم باستخدام SolidWorks مع تحليل ANSYS للضغوط والتشوهات",
            ),
            category: Category::CadDesign,
            image: "/images/hero-bg.png",
            thumbnail: "/images/hero-bg.png",
            tags: &["SolidWorks", "ANSYS", "FEA", "Mechanical Design"],
            project_link: None,
            drive_link: Some("#"),
        },
        GalleryImage {
            id: "2",
            title: Text::new("Engineering Stress Analysis", "تحليل الضغوط الهندسية"),
            description: Text::new(
                "Comprehensive stress and deformation analysis on complex mechanical components",
                "تحليل شامل للضغوط والتشوهات على مكونات ميكانيكية معقدة",
            ),
            category: Category::FeaAnalysis,
            image: "/images/skills-bg.jpg",
            thumbnail: "/images/skills-bg.jpg",
            tags: &["ANSYS", "FEA", "Simulation", "Analysis"],
            project_link: None,
            drive_link: Some("#"),
        },
        GalleryImage {
            id: "3",
            title: Text::new("Precision Engineering Drawings", "رسومات هندسية دقيقة"),
            description: Text::new(
                "Professional engineering drawings compliant with ASME and ISO standards",
                "رسومات هندسية احترافية تتوافق مع معايير ASME و ISO",
            ),
            category: Category::TechnicalDocumentation,
            image: "/images/experience-timeline.jpg",
            thumbnail: "/images/experience-timeline.jpg",
            tags: &["AutoCAD", "ASME", "ISO", "Technical Drawings"],
            project_link: None,
            drive_link: Some("#"),
        },
        GalleryImage {
            id: "4",
            title: Text::new("Precision Product Design", "تصميم المنتجات الدقيقة"),
            description: Text::new(
                "Precision product design for various industries with focus on quality and performance",
                "تصميم منتجات دقيقة للصناعات المختلفة مع التركيز على الجودة والأداء",
            ),
            category: Category::CadDesign,
            image: "/images/projects-showcase.jpg",
            thumbnail: "/images/projects-showcase.jpg",
            tags: &["Product Design", "SolidWorks", "Manufacturing", "Quality"],
            project_link: None,
            drive_link: Some("#"),
        },
        GalleryImage {
            id: "5",
            title: Text::new("Dynamic Simulation", "محاكاة ديناميكية"),
            description: Text::new(
                "Dynamic simulation of complex mechanical systems",
                "محاكاة ديناميكية للأنظمة الميكانيكية المعقدة",
            ),
            category: Category::FeaAnalysis,
            image: "/images/contact-bg.jpg",
            thumbnail: "/images/contact-bg.jpg",
            tags: &["ANSYS", "Dynamics", "Simulation", "Mechanical Systems"],
            project_link: None,
            drive_link: Some("#"),
        },
        GalleryImage {
            id: "6",
            title: Text::new("Advanced 3D Design", "تصميم ثلاثي الأبعاد متقدم"),
            description: Text::new(
                "Advanced 3D models using Blender and SolidWorks",
                "نماذج ثلاثية الأبعاد متقدمة باستخدام Blender و SolidWorks",
            ),
            category: Category::CadDesign,
            image: "/images/hero-background.jpg",
            thumbnail: "/images/hero-background.jpg",
            tags: &["Blender", "SolidWorks", "3D Modeling", "Visualization"],
            project_link: None,
            drive_link: Some("#"),
        },
    ]
}
