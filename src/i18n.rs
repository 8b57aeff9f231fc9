//! Translation dictionary.
//!
//! Every piece of interface text on the page is addressed by a [`Key`]. Keys are
//! a closed enum rather than free-form strings, and each one is declared
//! together with its English and Arabic value in a single `dictionary!` table:
//!
//! ```text
//! NavHome => "nav.home" { en: "Home", ar: "الرئيسية" },
//! ```
//!
//! Leaving out either language is a compile error, so a missing translation can
//! never reach the rendered site. The dot-namespaced string form (`"nav.home"`)
//! is kept for display and for string-keyed lookups from the CLI.
//!
//! ## Namespaces
//!
//! | Prefix | Section |
//! |--------|---------|
//! | `nav.*` | Navigation bar and toggles |
//! | `hero.*` | Hero banner |
//! | `about.*` | About section and stat cards |
//! | `services.*` | Services & certifications |
//! | `skills.*` | Skill categories and spoken languages |
//! | `gallery.*` | Gallery grid and lightbox |
//! | `projects.*` | Project cards |
//! | `experience.*` | Timeline, certifications, education |
//! | `contact.*` | Contact details and form |
//! | `footer.*` | Footer |
//! | `notFound.*`, `error.*` | Fallback pages |

use std::fmt;

/// A supported display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Ar];

    /// BCP 47 code used in `lang` attributes.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    /// Text direction for the `dir` attribute.
    pub fn dir(self) -> &'static str {
        match self {
            Language::En => "ltr",
            Language::Ar => "rtl",
        }
    }

    /// The other language.
    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Ar,
            Language::Ar => Language::En,
        }
    }

    /// Parse a language code. Only the two supported codes are accepted.
    pub fn parse(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "ar" => Some(Language::Ar),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl serde::Serialize for Language {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> serde::Deserialize<'de> for Language {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Language::parse(&code).ok_or_else(|| {
            serde::de::Error::custom(format!("unsupported language '{code}', expected 'en' or 'ar'"))
        })
    }
}

/// A bilingual literal used by static content records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Text {
    pub en: &'static str,
    pub ar: &'static str,
}

impl Text {
    pub const fn new(en: &'static str, ar: &'static str) -> Self {
        Self { en, ar }
    }

    /// Same text in both languages (product names, tool names).
    pub const fn same(value: &'static str) -> Self {
        Self { en: value, ar: value }
    }

    pub fn get(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.en,
            Language::Ar => self.ar,
        }
    }
}

macro_rules! dictionary {
    ($( $variant:ident => $key:literal { en: $en:literal, ar: $ar:literal } ),+ $(,)?) => {
        /// A translation key. See the module docs for namespaces.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Key {
            $($variant),+
        }

        impl Key {
            /// Every key, in declaration order.
            pub const ALL: &'static [Key] = &[$(Key::$variant),+];

            /// Dot-namespaced identifier, e.g. `"about.title"`.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Key::$variant => $key),+
                }
            }

            /// Both values of this key.
            pub const fn text(self) -> Text {
                match self {
                    $(Key::$variant => Text::new($en, $ar)),+
                }
            }
        }
    };
}

impl Key {
    /// Resolve a dot-namespaced identifier back to its key.
    pub fn parse(key: &str) -> Option<Key> {
        Key::ALL.iter().copied().find(|k| k.as_str() == key)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Localized value of `key` in `language`. Total: every key has both values.
pub fn translate(language: Language, key: Key) -> &'static str {
    key.text().get(language)
}

dictionary! {
    // Navigation
    NavHome => "nav.home" { en: "Home", ar: "الرئيسية" },
    NavAbout => "nav.about" { en: "About", ar: "نبذة عني" },
    NavServices => "nav.services" { en: "Services", ar: "الخدمات" },
    NavSkills => "nav.skills" { en: "Skills", ar: "المهارات" },
    NavGallery => "nav.gallery" { en: "Gallery", ar: "المعرض" },
    NavProjects => "nav.projects" { en: "Projects", ar: "المشاريع" },
    NavExperience => "nav.experience" { en: "Experience", ar: "الخبرات" },
    NavContact => "nav.contact" { en: "Contact", ar: "تواصل" },
    NavContactMe => "nav.contactMe" { en: "Contact Me", ar: "تواصل معي" },
    NavSwitchLanguage => "nav.switchLanguage" { en: "العربية", ar: "English" },
    NavToggleTheme => "nav.toggleTheme" { en: "Toggle dark mode", ar: "تبديل الوضع الداكن" },
    NavOpenMenu => "nav.openMenu" { en: "Open menu", ar: "فتح القائمة" },

    // Hero
    HeroName => "hero.name" { en: "Amr Ammory", ar: "عمرو عموري" },
    HeroRole => "hero.role" { en: "Mechanical Engineer", ar: "مهندس ميكانيكي" },
    HeroTagline => "hero.tagline" {
        en: "Specializing in Advanced Mechanical Design and Precision Manufacturing with expertise in SolidWorks, ANSYS, and AutoCAD",
        ar: "متخصص في التصميم الميكانيكي المتقدم والتصنيع الدقيق مع خبرة في SolidWorks و ANSYS و AutoCAD"
    },
    HeroViewWork => "hero.viewWork" { en: "View My Work", ar: "شاهد أعمالي" },
    HeroGetInTouch => "hero.getInTouch" { en: "Get In Touch", ar: "تواصل معي" },

    // About
    AboutTitle => "about.title" { en: "About Me", ar: "نبذة عني" },
    AboutDescription => "about.description" {
        en: "Mechanical engineer focused on precision design, engineering analysis and manufacturing. I turn ideas into reliable, manufacturable products and lead teams that deliver them.",
        ar: "مهندس ميكانيكي يركز على التصميم الدقيق والتحليل الهندسي والتصنيع. أحوّل الأفكار إلى منتجات موثوقة قابلة للتصنيع وأقود الفرق التي تنجزها."
    },
    AboutDownloadCvEn => "about.downloadCvEn" { en: "Download My CV - English", ar: "تحميل السيرة الذاتية - إنجليزي" },
    AboutDownloadCvAr => "about.downloadCvAr" { en: "Download My CV - Arabic", ar: "تحميل السيرة الذاتية - عربي" },
    AboutStatProjectsLabel => "about.stats.projectsLabel" { en: "Projects Completed", ar: "المشاريع المنجزة" },
    AboutStatProjects => "about.stats.projects" { en: "Design and analysis projects delivered", ar: "مشاريع تصميم وتحليل تم تسليمها" },
    AboutStatCertificationsLabel => "about.stats.certificationsLabel" { en: "Certifications", ar: "الشهادات" },
    AboutStatCertifications => "about.stats.certifications" { en: "Professional certifications earned", ar: "شهادات مهنية معتمدة" },
    AboutStatExperienceLabel => "about.stats.experienceLabel" { en: "Years Experience", ar: "سنوات الخبرة" },
    AboutStatExperience => "about.stats.experience" { en: "Years of hands-on engineering", ar: "سنوات من العمل الهندسي التطبيقي" },
    AboutStatAchievementLabel => "about.stats.achievementLabel" { en: "Team Leadership", ar: "قيادة الفريق" },
    AboutStatAchievement => "about.stats.achievement" { en: "Commitment to every team I lead", ar: "التزام كامل مع كل فريق أقوده" },
    AboutDesignTitle => "about.designTitle" { en: "Precision Design", ar: "التصميم الدقيق" },
    AboutDesignDesc => "about.designDesc" {
        en: "Detailed 3D modeling and drawings that meet ASME and ISO standards.",
        ar: "نمذجة ثلاثية الأبعاد ورسومات تفصيلية تتوافق مع معايير ASME و ISO."
    },
    AboutManufacturingTitle => "about.manufacturingTitle" { en: "Manufacturing", ar: "التصنيع" },
    AboutManufacturingDesc => "about.manufacturingDesc" {
        en: "Design for manufacturing with a focus on quality and cost.",
        ar: "تصميم قابل للتصنيع مع التركيز على الجودة والتكلفة."
    },
    AboutProjectTitle => "about.projectTitle" { en: "Project Leadership", ar: "قيادة المشاريع" },
    AboutProjectDesc => "about.projectDesc" {
        en: "Planning and leading engineering and community projects end to end.",
        ar: "تخطيط وقيادة المشاريع الهندسية والمجتمعية من البداية إلى النهاية."
    },

    // Services & certifications
    ServicesTitle => "services.title" { en: "Services & Certifications", ar: "الخدمات والشهادات" },
    ServicesSubtitle => "services.subtitle" {
        en: "Specialized career services backed by verified certifications",
        ar: "خدمات مهنية متخصصة مدعومة بشهادات معتمدة"
    },
    ServicesAtsOptimized => "services.atsOptimized" { en: "ATS-Optimized CV Writing", ar: "كتابة سير ذاتية متوافقة مع ATS" },
    ServicesAtsDesc => "services.atsDesc" {
        en: "CVs structured to pass applicant tracking systems and reach recruiters.",
        ar: "سير ذاتية مصممة لتجاوز أنظمة تتبع المتقدمين والوصول إلى مسؤولي التوظيف."
    },
    ServicesAtsCount => "services.atsCount" { en: "100+ CVs", ar: "+100 سيرة ذاتية" },
    ServicesAtsAchievement => "services.atsAchievement" { en: "Interviews secured across industries", ar: "مقابلات تم الحصول عليها في مختلف القطاعات" },
    ServicesCvOptimization => "services.cvOptimization" { en: "CV Review & Optimization", ar: "مراجعة وتحسين السيرة الذاتية" },
    ServicesCvDesc => "services.cvDesc" {
        en: "Line-by-line review with keyword and formatting improvements.",
        ar: "مراجعة دقيقة مع تحسين الكلمات المفتاحية والتنسيق."
    },
    ServicesCvRate => "services.cvRate" { en: "95% pass rate", ar: "نسبة نجاح 95%" },
    ServicesCvValidation => "services.cvValidation" { en: "Validated with ATS scanners", ar: "تم التحقق بأدوات فحص ATS" },
    ServicesCertifications => "services.certifications" { en: "Verified Certifications", ar: "شهادات معتمدة" },
    ServicesVerified => "services.verified" { en: "Verified", ar: "معتمد" },
    ServicesPmpTitle => "services.pmpTitle" { en: "Project Management Professional", ar: "محترف إدارة المشاريع" },
    ServicesPmpIssuer => "services.pmpIssuer" { en: "Project Management Institute", ar: "معهد إدارة المشاريع" },
    ServicesPmpDesc => "services.pmpDesc" {
        en: "Planning, execution and control of complex projects.",
        ar: "تخطيط وتنفيذ ومراقبة المشاريع المعقدة."
    },
    ServicesHrmTitle => "services.hrmTitle" { en: "Human Resource Management", ar: "إدارة الموارد البشرية" },
    ServicesHrmIssuer => "services.hrmIssuer" { en: "HR Academy", ar: "أكاديمية الموارد البشرية" },
    ServicesHrmDesc => "services.hrmDesc" {
        en: "Recruitment, talent assessment and team development.",
        ar: "التوظيف وتقييم المواهب وتطوير الفرق."
    },
    ServicesAtsAuditor => "services.atsAuditor" { en: "Certified ATS Auditor", ar: "مدقق ATS معتمد" },
    ServicesAtsAuditorIssuer => "services.atsAuditorIssuer" { en: "Career Standards Board", ar: "مجلس المعايير المهنية" },
    ServicesAtsAuditorDesc => "services.atsAuditorDesc" {
        en: "Auditing CVs against applicant tracking requirements.",
        ar: "تدقيق السير الذاتية وفق متطلبات أنظمة تتبع المتقدمين."
    },
    ServicesWhyChoose => "services.whyChoose" { en: "Why Work With Me", ar: "لماذا تعمل معي" },
    ServicesCompatibleTitle => "services.compatibleTitle" { en: "ATS Compatible", ar: "متوافق مع ATS" },
    ServicesCompatibleDesc => "services.compatibleDesc" {
        en: "Every document is tested against real tracking systems.",
        ar: "كل مستند يتم اختباره على أنظمة تتبع حقيقية."
    },
    ServicesStoriesTitle => "services.storiesTitle" { en: "Success Stories", ar: "قصص نجاح" },
    ServicesStoriesDesc => "services.storiesDesc" {
        en: "Clients hired by leading companies in the region.",
        ar: "عملاء تم توظيفهم في شركات رائدة في المنطقة."
    },
    ServicesExpertiseTitle => "services.expertiseTitle" { en: "Engineering Expertise", ar: "خبرة هندسية" },
    ServicesExpertiseDesc => "services.expertiseDesc" {
        en: "Technical background that speaks the language of engineering employers.",
        ar: "خلفية تقنية تتحدث لغة أصحاب العمل في المجال الهندسي."
    },

    // Skills
    SkillsTitle => "skills.title" { en: "Skills & Expertise", ar: "المهارات والخبرات" },
    SkillsSubtitle => "skills.subtitle" {
        en: "Tools and disciplines I use every day",
        ar: "الأدوات والتخصصات التي أستخدمها يومياً"
    },
    SkillsAdvancedDesign => "skills.advancedDesign" { en: "Advanced Engineering Design", ar: "التصميم الهندسي المتقدم" },
    SkillsEngineeringAnalysis => "skills.engineeringAnalysis" { en: "Engineering Analysis & Simulation", ar: "التحليل الهندسي والمحاكاة" },
    SkillsTechnicalDoc => "skills.technicalDoc" { en: "Technical Documentation", ar: "التوثيق الفني" },
    SkillsProjectMgmt => "skills.projectMgmt" { en: "Project Management", ar: "إدارة المشاريع" },
    SkillsDigitalContent => "skills.digitalContent" { en: "Digital Content & Marketing", ar: "المحتوى الرقمي والتسويق" },
    SkillsProfessional => "skills.professionalSkills" { en: "Professional Skills", ar: "المهارات المهنية" },
    SkillsStressAnalysis => "skills.stressAnalysis" { en: "Stress Analysis", ar: "تحليل الإجهادات" },
    SkillsMechanicalSystems => "skills.mechanicalSystems" { en: "Mechanical Systems", ar: "الأنظمة الميكانيكية" },
    SkillsEngineeringDrawings => "skills.engineeringDrawings" { en: "Engineering Drawings", ar: "الرسومات الهندسية" },
    SkillsAsmeStandards => "skills.asmeStandards" { en: "ASME Standards", ar: "معايير ASME" },
    SkillsIsoCompliance => "skills.isoCompliance" { en: "ISO Compliance", ar: "الامتثال لمعايير ISO" },
    SkillsStrategicPlanning => "skills.strategicPlanning" { en: "Strategic Planning", ar: "التخطيط الاستراتيجي" },
    SkillsTeamLeadership => "skills.teamLeadership" { en: "Team Leadership", ar: "قيادة الفريق" },
    SkillsProcessOptimization => "skills.processOptimization" { en: "Process Optimization", ar: "تحسين العمليات" },
    SkillsVideoEditing => "skills.videoEditing" { en: "Video Editing", ar: "مونتاج الفيديو" },
    SkillsGraphicDesign => "skills.graphicDesign" { en: "Graphic Design", ar: "التصميم الجرافيكي" },
    SkillsSocialMedia => "skills.socialMedia" { en: "Social Media", ar: "وسائل التواصل الاجتماعي" },
    SkillsProblemSolving => "skills.problemSolving" { en: "Problem Solving", ar: "حل المشكلات" },
    SkillsCriticalThinking => "skills.criticalThinking" { en: "Critical Thinking", ar: "التفكير النقدي" },
    SkillsCommunication => "skills.communication" { en: "Communication", ar: "التواصل" },
    SkillsLanguages => "skills.languages" { en: "Languages", ar: "اللغات" },
    SkillsArabic => "skills.arabic" { en: "Arabic", ar: "العربية" },
    SkillsArabicLevel => "skills.arabicLevel" { en: "Native", ar: "اللغة الأم" },
    SkillsEnglish => "skills.english" { en: "English", ar: "الإنجليزية" },
    SkillsEnglishLevel => "skills.englishLevel" { en: "Professional working proficiency", ar: "كفاءة مهنية في العمل" },

    // Gallery
    GalleryTitle => "gallery.title" { en: "Engineering Portfolio Gallery", ar: "معرض الأعمال الهندسية" },
    GallerySubtitle => "gallery.subtitle" {
        en: "Explore a collection of my diverse engineering projects and advanced designs",
        ar: "استكشف مجموعة من مشاريعي الهندسية المتنوعة والتصاميم المتقدمة"
    },
    GalleryAll => "gallery.all" { en: "All", ar: "الكل" },
    GalleryCadDesign => "gallery.category.cadDesign" { en: "CAD Design", ar: "التصميم بمساعدة الحاسوب" },
    GalleryFeaAnalysis => "gallery.category.feaAnalysis" { en: "FEA Analysis", ar: "تحليل العناصر المحدودة" },
    GalleryTechnicalDocumentation => "gallery.category.technicalDocumentation" { en: "Technical Documentation", ar: "التوثيق الفني" },
    GalleryViewDetails => "gallery.viewDetails" { en: "View Details", ar: "عرض التفاصيل" },
    GalleryDownload => "gallery.download" { en: "Download", ar: "تحميل" },
    GalleryViewProject => "gallery.viewProject" { en: "View Project", ar: "عرض المشروع" },
    GalleryEmpty => "gallery.empty" { en: "No images in this category", ar: "لا توجد صور في هذه الفئة" },
    GalleryClose => "gallery.close" { en: "Close", ar: "إغلاق" },
    GalleryPrevious => "gallery.previous" { en: "Previous image", ar: "الصورة السابقة" },
    GalleryNext => "gallery.next" { en: "Next image", ar: "الصورة التالية" },

    // Projects
    ProjectsTitle => "projects.title" { en: "Featured Projects", ar: "المشاريع المميزة" },
    ProjectsSubtitle => "projects.subtitle" {
        en: "Engineering, education and community initiatives I have built and led",
        ar: "مبادرات هندسية وتعليمية ومجتمعية قمت ببنائها وقيادتها"
    },
    ProjectsEngPlatform => "projects.engPlatform" { en: "ENG Educational Platform", ar: "منصة ENG التعليمية" },
    ProjectsEngDesc => "projects.engDesc" {
        en: "An educational platform teaching CAD design and technical documentation to engineering students.",
        ar: "منصة تعليمية لتدريس التصميم بمساعدة الحاسوب والتوثيق الفني لطلاب الهندسة."
    },
    ProjectsSheSyria => "projects.sheSyria" { en: "SHE SYRIA Initiative", ar: "مبادرة SHE SYRIA" },
    ProjectsSheDesc => "projects.sheDesc" {
        en: "A community initiative empowering women through skills training and leadership.",
        ar: "مبادرة مجتمعية لتمكين المرأة من خلال التدريب على المهارات والقيادة."
    },
    ProjectsSyriaMakers => "projects.syriamakers" { en: "SYRIA MAKERS Community", ar: "مجتمع SYRIA MAKERS" },
    ProjectsSyriaDesc => "projects.syriaDesc" {
        en: "An innovation hub connecting makers, engineers and technology enthusiasts.",
        ar: "مركز ابتكار يربط بين الصناع والمهندسين والمهتمين بالتكنولوجيا."
    },
    ProjectsViewProject => "projects.viewProject" { en: "View Project", ar: "عرض المشروع" },
    ProjectsInterested => "projects.interested" { en: "Interested in working together?", ar: "مهتم بالعمل معاً؟" },
    ProjectsInterestedDesc => "projects.interestedDesc" {
        en: "I am always open to new engineering challenges and collaborations.",
        ar: "أنا منفتح دائماً على التحديات الهندسية والتعاون الجديد."
    },

    // Experience
    ExperienceTitle => "experience.title" { en: "Professional Experience", ar: "الخبرة المهنية" },
    ExperiencePrecisionDesigner => "experience.precisionDesigner" { en: "Precision Product Designer", ar: "مصمم منتجات دقيقة" },
    ExperienceProfiCar => "experience.profiCar" { en: "Profi Car", ar: "بروفي كار" },
    ExperiencePrecisionDesc => "experience.precisionDesc" {
        en: "Designed high-precision components and improved production quality.",
        ar: "تصميم مكونات عالية الدقة وتحسين جودة الإنتاج."
    },
    ExperienceAutomotive => "experience.automotive" { en: "Automotive Technician Trainee", ar: "متدرب فني سيارات" },
    ExperienceTrainingProgram => "experience.trainingProgram" { en: "Technical Training Program", ar: "برنامج التدريب الفني" },
    ExperienceAutomotiveDesc => "experience.automotiveDesc" {
        en: "Hands-on training in automotive maintenance and aluminum fabrication.",
        ar: "تدريب عملي على صيانة السيارات وتصنيع الألمنيوم."
    },
    ExperienceVisualContent => "experience.visualContent" { en: "Visual Content Creator", ar: "صانع محتوى مرئي" },
    ExperienceDigitalMarketing => "experience.digitalMarketing" { en: "Digital Marketing", ar: "التسويق الرقمي" },
    ExperienceVisualDesc => "experience.visualDesc" {
        en: "Produced video and visual content and managed social media strategy.",
        ar: "إنتاج محتوى مرئي ومقاطع فيديو وإدارة استراتيجية وسائل التواصل."
    },
    ExperienceProjectLeader => "experience.projectLeader" { en: "Project Leader", ar: "قائد مشاريع" },
    ExperienceMultipleProjects => "experience.multipleProjects" { en: "Multiple Projects", ar: "مشاريع متعددة" },
    ExperienceLeaderDesc => "experience.leaderDesc" {
        en: "Led multidisciplinary teams delivering innovation projects.",
        ar: "قيادة فرق متعددة التخصصات لتنفيذ مشاريع مبتكرة."
    },
    ExperienceHighlightPrecision => "experience.highlight.precision" { en: "High-precision design", ar: "تصميم عالي الدقة" },
    ExperienceHighlightQuality => "experience.highlight.quality" { en: "Quality improvement", ar: "تحسين الجودة" },
    ExperienceHighlightManufacturing => "experience.highlight.manufacturing" { en: "Manufacturing excellence", ar: "التميز في التصنيع" },
    ExperienceHighlightMaintenance => "experience.highlight.maintenance" { en: "Automotive maintenance", ar: "صيانة السيارات" },
    ExperienceHighlightAluminum => "experience.highlight.aluminum" { en: "Aluminum fabrication", ar: "تصنيع الألمنيوم" },
    ExperienceHighlightIndustrial => "experience.highlight.industrial" { en: "Industrial processes", ar: "العمليات الصناعية" },
    ExperienceHighlightVideo => "experience.highlight.video" { en: "Video production", ar: "إنتاج الفيديو" },
    ExperienceHighlightContent => "experience.highlight.content" { en: "Content management", ar: "إدارة المحتوى" },
    ExperienceHighlightSocial => "experience.highlight.social" { en: "Social media strategy", ar: "استراتيجية وسائل التواصل" },
    ExperienceHighlightLeadership => "experience.highlight.leadership" { en: "Project leadership", ar: "قيادة المشاريع" },
    ExperienceHighlightInnovation => "experience.highlight.innovation" { en: "Innovation", ar: "الابتكار" },
    ExperienceHighlightTeam => "experience.highlight.team" { en: "Team management", ar: "إدارة الفرق" },
    ExperienceCertifications => "experience.certifications" { en: "Certifications", ar: "الشهادات" },
    ExperienceSolidworks => "experience.solidworks" { en: "SolidWorks Certified Associate", ar: "شهادة SolidWorks المعتمدة" },
    ExperienceEngineers => "experience.engineers" { en: "Syndicate of Engineers", ar: "نقابة المهندسين" },
    ExperienceMentorship => "experience.mentorship" { en: "Project Management Mentorship", ar: "برنامج إرشاد في إدارة المشاريع" },
    ExperiencePmi => "experience.pmi" { en: "PMI Chapter", ar: "فرع معهد إدارة المشاريع" },
    ExperienceEnglish => "experience.english" { en: "English Language Certificate", ar: "شهادة اللغة الإنجليزية" },
    ExperienceProficiency => "experience.proficiency" { en: "Proficiency Program", ar: "برنامج الكفاءة" },
    ExperienceBusiness => "experience.business" { en: "Business Development", ar: "تطوير الأعمال" },
    ExperienceScaleup => "experience.scaleup" { en: "ScaleUp Program", ar: "برنامج ScaleUp" },
    ExperienceAdvanced => "experience.advanced" { en: "Advanced Professional Skills", ar: "المهارات المهنية المتقدمة" },
    ExperienceDevelopment => "experience.development" { en: "Professional Development Center", ar: "مركز التطوير المهني" },
    ExperienceAutomotive2 => "experience.automotive2" { en: "Automotive Technology Certificate", ar: "شهادة تكنولوجيا السيارات" },
    ExperienceNrc => "experience.nrc" { en: "Norwegian Refugee Council", ar: "المجلس النرويجي للاجئين" },
    ExperienceEducation => "experience.education" { en: "Education", ar: "التعليم" },
    ExperienceMechanical => "experience.mechanical" {
        en: "Bachelor of Mechanical Engineering, University of Aleppo",
        ar: "بكالوريوس الهندسة الميكانيكية، جامعة حلب"
    },
    ExperienceAward => "experience.award" { en: "Award for outstanding graduation project", ar: "جائزة مشروع التخرج المتميز" },

    // Contact
    ContactTitle => "contact.title" { en: "Get In Touch", ar: "تواصل معي" },
    ContactSubtitle => "contact.subtitle" {
        en: "Have a project in mind or a question? Send me a message.",
        ar: "لديك مشروع أو سؤال؟ أرسل لي رسالة."
    },
    ContactInfo => "contact.contactInfo" { en: "Contact Information", ar: "معلومات التواصل" },
    ContactEmailLabel => "contact.emailLabel" { en: "Email", ar: "البريد الإلكتروني" },
    ContactPhoneLabel => "contact.phoneLabel" { en: "Phone", ar: "الهاتف" },
    ContactLocationLabel => "contact.locationLabel" { en: "Location", ar: "الموقع" },
    ContactConnectWithMe => "contact.connectWithMe" { en: "Connect With Me", ar: "تابعني" },
    ContactSendMessage => "contact.sendMessage" { en: "Send Me a Message", ar: "أرسل لي رسالة" },
    ContactNameField => "contact.nameField" { en: "Full Name", ar: "الاسم الكامل" },
    ContactName => "contact.name" { en: "Your name", ar: "اسمك" },
    ContactEmailField => "contact.emailField" { en: "Email Address", ar: "عنوان البريد الإلكتروني" },
    ContactEmail => "contact.email" { en: "you@example.com", ar: "you@example.com" },
    ContactSubjectField => "contact.subjectField" { en: "Subject", ar: "الموضوع" },
    ContactSubject => "contact.subject" { en: "What is this about?", ar: "ما موضوع رسالتك؟" },
    ContactMessageField => "contact.messageField" { en: "Message", ar: "الرسالة" },
    ContactMessage => "contact.message" { en: "Write your message here", ar: "اكتب رسالتك هنا" },
    ContactSend => "contact.send" { en: "Send Message", ar: "إرسال الرسالة" },
    ContactThanks => "contact.thanks" {
        en: "Thank you for your message! I'll get back to you soon.",
        ar: "شكراً لرسالتك! سأرد عليك قريباً."
    },

    // Footer
    FooterBio => "footer.bio" {
        en: "Mechanical engineer building precise, reliable designs from concept to production.",
        ar: "مهندس ميكانيكي يبني تصاميم دقيقة وموثوقة من الفكرة إلى الإنتاج."
    },
    FooterQuickLinks => "footer.quickLinks" { en: "Quick Links", ar: "روابط سريعة" },
    FooterContact => "footer.contact" { en: "Contact", ar: "التواصل" },
    FooterCopyright => "footer.copyright" { en: "All rights reserved.", ar: "جميع الحقوق محفوظة." },
    FooterDesigned => "footer.designed" { en: "Designed and built with care.", ar: "صُمم وبُني بعناية." },

    // Fallback pages
    NotFoundTitle => "notFound.title" { en: "Page Not Found", ar: "الصفحة غير موجودة" },
    NotFoundMessage => "notFound.message" {
        en: "The page you are looking for does not exist or has been moved.",
        ar: "الصفحة التي تبحث عنها غير موجودة أو تم نقلها."
    },
    NotFoundBackHome => "notFound.backHome" { en: "Back to Home", ar: "العودة إلى الرئيسية" },
    ErrorTitle => "error.title" { en: "Something went wrong", ar: "حدث خطأ ما" },
    ErrorMessage => "error.message" {
        en: "This page could not be displayed. Please try again later.",
        ar: "تعذر عرض هذه الصفحة. يرجى المحاولة لاحقاً."
    },
    ErrorReload => "error.reload" { en: "Reload Page", ar: "إعادة تحميل الصفحة" },
}
