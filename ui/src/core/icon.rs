//! Icon-name lookup shared by every rendering surface.
//!
//! Data documents name icons with free text (`"Database"`, `"Cloud"`, ...).
//! [`Icon::resolve`] maps that text onto the closed set below; anything it
//! does not recognise becomes [`Icon::DEFAULT`].

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    BarChart3,
    TrendingUp,
    Database,
    Cloud,
    Settings,
    Users,
    BookOpen,
    Clock,
    Award,
    Building,
    Globe,
    Code,
    GraduationCap,
    Briefcase,
    UserPlus,
    MessageCircle,
    Instagram,
    Send,
    Facebook,
    Linkedin,
    Phone,
    Mail,
    Copy,
    ExternalLink,
    // Chrome-only icons; never produced by `resolve`.
    Calendar,
    Star,
    ArrowLeft,
    ChevronRight,
    Close,
}

impl Icon {
    pub const DEFAULT: Icon = Icon::BookOpen;

    /// Exact, case-sensitive lookup with a catch-all default.
    pub fn resolve(name: &str) -> Icon {
        match name {
            "BarChart3" => Icon::BarChart3,
            "TrendingUp" => Icon::TrendingUp,
            "Database" => Icon::Database,
            "Cloud" => Icon::Cloud,
            "Settings" => Icon::Settings,
            "Users" => Icon::Users,
            "BookOpen" => Icon::BookOpen,
            "Clock" => Icon::Clock,
            "Award" => Icon::Award,
            "Building" => Icon::Building,
            "Globe" => Icon::Globe,
            "Code" => Icon::Code,
            "GraduationCap" => Icon::GraduationCap,
            "Briefcase" => Icon::Briefcase,
            "UserPlus" => Icon::UserPlus,
            // No dedicated handshake glyph.
            "Handshake" => Icon::Users,
            "MessageCircle" => Icon::MessageCircle,
            "Instagram" => Icon::Instagram,
            "Send" => Icon::Send,
            "Facebook" => Icon::Facebook,
            "Linkedin" => Icon::Linkedin,
            "Phone" => Icon::Phone,
            "Mail" => Icon::Mail,
            "Copy" => Icon::Copy,
            "ExternalLink" => Icon::ExternalLink,
            _ => Icon::DEFAULT,
        }
    }

    /// Kebab-case name, used for the `icon--*` CSS modifier.
    pub fn slug(self) -> &'static str {
        match self {
            Icon::BarChart3 => "bar-chart",
            Icon::TrendingUp => "trending-up",
            Icon::Database => "database",
            Icon::Cloud => "cloud",
            Icon::Settings => "settings",
            Icon::Users => "users",
            Icon::BookOpen => "book-open",
            Icon::Clock => "clock",
            Icon::Award => "award",
            Icon::Building => "building",
            Icon::Globe => "globe",
            Icon::Code => "code",
            Icon::GraduationCap => "graduation-cap",
            Icon::Briefcase => "briefcase",
            Icon::UserPlus => "user-plus",
            Icon::MessageCircle => "message-circle",
            Icon::Instagram => "instagram",
            Icon::Send => "send",
            Icon::Facebook => "facebook",
            Icon::Linkedin => "linkedin",
            Icon::Phone => "phone",
            Icon::Mail => "mail",
            Icon::Copy => "copy",
            Icon::ExternalLink => "external-link",
            Icon::Calendar => "calendar",
            Icon::Star => "star",
            Icon::ArrowLeft => "arrow-left",
            Icon::ChevronRight => "chevron-right",
            Icon::Close => "close",
        }
    }

    /// Text glyph drawn inside the icon badge.
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::BarChart3 => "📊",
            Icon::TrendingUp => "📈",
            Icon::Database => "🗄",
            Icon::Cloud => "☁",
            Icon::Settings => "⚙",
            Icon::Users => "👥",
            Icon::BookOpen => "📖",
            Icon::Clock => "🕒",
            Icon::Award => "🏅",
            Icon::Building => "🏢",
            Icon::Globe => "🌐",
            Icon::Code => "</>",
            Icon::GraduationCap => "🎓",
            Icon::Briefcase => "💼",
            Icon::UserPlus => "👤",
            Icon::MessageCircle => "💬",
            Icon::Instagram => "📷",
            Icon::Send => "✈",
            Icon::Facebook => "f",
            Icon::Linkedin => "in",
            Icon::Phone => "📞",
            Icon::Mail => "✉",
            Icon::Copy => "⧉",
            Icon::ExternalLink => "↗",
            Icon::Calendar => "📅",
            Icon::Star => "★",
            Icon::ArrowLeft => "←",
            Icon::ChevronRight => "›",
            Icon::Close => "✕",
        }
    }
}
