use crate::domain::site::{NavLink, SiteSettings};
use crate::page::geometry::Rect;
use crate::page::html::escape;
use crate::utils::error::LOAD_FAILURE_MESSAGE;

/// Class carried by every card that takes part in the entrance animation.
pub const ANIMATION_CLASS: &str = "fade-in";
/// Class added once a card has been revealed.
pub const VISIBLE_CLASS: &str = "visible";
/// Class carried by the nav menu while it is open.
pub const ACTIVE_CLASS: &str = "active";
pub const YEAR_PLACEHOLDER_ID: &str = "current-year";

/// Ordered set of CSS class names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList(Vec<String>);

impl ClassList {
    pub fn new(classes: &[&str]) -> Self {
        let mut list = Self::default();
        for class in classes {
            list.add(class);
        }
        list
    }

    /// Returns `true` when the class was not present before.
    pub fn add(&mut self, class: &str) -> bool {
        if self.contains(class) {
            return false;
        }
        self.0.push(class.to_string());
        true
    }

    pub fn remove(&mut self, class: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|c| c != class);
        self.0.len() != before
    }

    pub fn contains(&self, class: &str) -> bool {
        self.0.iter().any(|c| c == class)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_attr(&self) -> String {
        self.0.join(" ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnitId(u64);

impl UnitId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    Skill,
    Project,
    Certificate,
}

impl CardKind {
    pub const ALL: [CardKind; 3] = [CardKind::Skill, CardKind::Project, CardKind::Certificate];

    pub fn class_name(&self) -> &'static str {
        match self {
            CardKind::Skill => "skill-card",
            CardKind::Project => "project-card",
            CardKind::Certificate => "certificate-card",
        }
    }

    /// Upward shift applied on hover, in pixels.
    pub fn hover_lift_px(&self) -> u32 {
        match self {
            CardKind::Project => 10,
            CardKind::Skill | CardKind::Certificate => 5,
        }
    }
}

/// Output of a card factory: what a card looks like, before it is placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub kind: CardKind,
    pub inner_html: String,
}

/// A card that has been inserted into a container.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualUnit {
    id: UnitId,
    kind: CardKind,
    pub classes: ClassList,
    inner_html: String,
    pub bounds: Option<Rect>,
}

impl VisualUnit {
    fn place(id: UnitId, card: Card) -> Self {
        Self {
            id,
            kind: card.kind,
            classes: ClassList::new(&[card.kind.class_name(), ANIMATION_CLASS]),
            inner_html: card.inner_html,
            bounds: None,
        }
    }

    pub fn id(&self) -> UnitId {
        self.id
    }

    pub fn kind(&self) -> CardKind {
        self.kind
    }

    pub fn inner_html(&self) -> &str {
        &self.inner_html
    }

    pub fn is_visible(&self) -> bool {
        self.classes.contains(VISIBLE_CLASS)
    }

    pub fn outer_html(&self) -> String {
        format!(
            "<div class=\"{}\">{}</div>",
            escape(&self.classes.to_attr()),
            self.inner_html
        )
    }
}

/// Inline failure message plus retry control placed in a container when the
/// document cannot be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorNotice {
    pub message: String,
}

impl Default for ErrorNotice {
    fn default() -> Self {
        Self {
            message: LOAD_FAILURE_MESSAGE.to_string(),
        }
    }
}

impl ErrorNotice {
    pub fn to_html(&self) -> String {
        format!(
            "<div class=\"error-message\"><p>{}</p>\
             <button type=\"button\" class=\"btn btn-primary retry-button\" \
             onclick=\"{}\">Retry</button></div>",
            RETRY_HANDLER,
            escape(&self.message)
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Unit(VisualUnit),
    Notice(ErrorNotice),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerId {
    Skills,
    Projects,
    Certificates,
}

impl ContainerId {
    pub const ALL: [ContainerId; 3] = [
        ContainerId::Skills,
        ContainerId::Projects,
        ContainerId::Certificates,
    ];

    pub fn element_id(&self) -> &'static str {
        match self {
            ContainerId::Skills => "skills-container",
            ContainerId::Projects => "projects-container",
            ContainerId::Certificates => "certificates-container",
        }
    }

    fn section_id(&self) -> &'static str {
        match self {
            ContainerId::Skills => "skills",
            ContainerId::Projects => "projects",
            ContainerId::Certificates => "certificates",
        }
    }

    fn heading(&self) -> &'static str {
        match self {
            ContainerId::Skills => "Skills",
            ContainerId::Projects => "Projects",
            ContainerId::Certificates => "Certificates",
        }
    }

    fn grid_class(&self) -> &'static str {
        match self {
            ContainerId::Skills => "skills-grid",
            ContainerId::Projects => "projects-grid",
            ContainerId::Certificates => "certificates-grid",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    id: ContainerId,
    children: Vec<Node>,
}

impl Container {
    fn new(id: ContainerId) -> Self {
        Self {
            id,
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> ContainerId {
        self.id
    }

    pub fn clear(&mut self) {
        self.children.clear();
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn units(&self) -> impl Iterator<Item = &VisualUnit> {
        self.children.iter().filter_map(|node| match node {
            Node::Unit(unit) => Some(unit),
            Node::Notice(_) => None,
        })
    }

    pub fn unit_count(&self) -> usize {
        self.units().count()
    }

    pub fn has_retry_control(&self) -> bool {
        self.children
            .iter()
            .any(|node| matches!(node, Node::Notice(_)))
    }

    pub fn show_notice(&mut self, notice: ErrorNotice) {
        self.children.clear();
        self.children.push(Node::Notice(notice));
    }

    pub fn inner_html(&self) -> String {
        self.children
            .iter()
            .map(|node| match node {
                Node::Unit(unit) => unit.outer_html(),
                Node::Notice(notice) => notice.to_html(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn unit_mut(&mut self, id: UnitId) -> Option<&mut VisualUnit> {
        self.children.iter_mut().find_map(|node| match node {
            Node::Unit(unit) if unit.id == id => Some(unit),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Menu,
    Close,
}

impl NavIcon {
    pub fn glyph_class(&self) -> &'static str {
        match self {
            NavIcon::Menu => "fas fa-bars",
            NavIcon::Close => "fas fa-times",
        }
    }

    pub fn to_html(&self) -> String {
        format!("<i class=\"{}\"></i>", self.glyph_class())
    }
}

/// Click handlers emitted into the static page so its controls behave like the
/// in-memory session: retry reloads, the toggle flips the menu, links close it.
const RETRY_HANDLER: &str = "location.reload()";

fn menu_toggle_handler() -> String {
    format!(
        "var open = this.parentNode.querySelector('.nav-menu').classList.toggle('{}'); \
         this.firstElementChild.className = open ? '{}' : '{}';",
        ACTIVE_CLASS,
        NavIcon::Close.glyph_class(),
        NavIcon::Menu.glyph_class()
    )
}

fn nav_link_handler() -> String {
    format!(
        "var nav = this.closest('nav'); \
         nav.querySelector('.nav-menu').classList.remove('{}'); \
         nav.querySelector('.menu-toggle i').className = '{}';",
        ACTIVE_CLASS,
        NavIcon::Menu.glyph_class()
    )
}

/// The collapsible navigation menu together with its toggle control.
#[derive(Debug, Clone, PartialEq)]
pub struct NavMenu {
    pub classes: ClassList,
    pub toggle_icon: NavIcon,
    links: Vec<NavLink>,
}

impl NavMenu {
    pub fn new(links: Vec<NavLink>) -> Self {
        Self {
            classes: ClassList::new(&["nav-menu"]),
            toggle_icon: NavIcon::Menu,
            links,
        }
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    pub fn is_active(&self) -> bool {
        self.classes.contains(ACTIVE_CLASS)
    }

    fn to_html(&self, owner: &str) -> String {
        let mut html = String::with_capacity(512);
        html.push_str("<header class=\"header\">\n<nav class=\"navbar\">\n");
        html.push_str(&format!(
            "<a href=\"#home\" class=\"logo\">{}</a>\n",
            escape(owner)
        ));
        html.push_str(&format!(
            "<ul class=\"{}\">\n",
            escape(&self.classes.to_attr())
        ));
        for link in &self.links {
            html.push_str(&format!(
                "<li><a href=\"{}\" class=\"nav-link\" onclick=\"{}\">{}</a></li>\n",
                escape(&link.href),
                escape(&nav_link_handler()),
                escape(&link.label)
            ));
        }
        html.push_str("</ul>\n");
        html.push_str(&format!(
            "<button type=\"button\" class=\"menu-toggle\" aria-label=\"Toggle navigation\" \
             onclick=\"{}\">{}</button>\n",
            escape(&menu_toggle_handler()),
            self.toggle_icon.to_html()
        ));
        html.push_str("</nav>\n</header>\n");
        html
    }
}

/// In-memory model of the page: the nodes the components read and mutate.
///
/// A document built with [`Document::new`] exposes the full page contract.
/// The `without_*` builders drop individual nodes so components can be
/// exercised against incomplete pages.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    settings: SiteSettings,
    year: Option<String>,
    nav: Option<NavMenu>,
    containers: Vec<Container>,
    next_unit: u64,
}

impl Document {
    pub fn new(settings: SiteSettings) -> Self {
        let nav = NavMenu::new(settings.nav_links.clone());
        Self {
            settings,
            year: Some(String::new()),
            nav: Some(nav),
            containers: ContainerId::ALL.iter().map(|id| Container::new(*id)).collect(),
            next_unit: 0,
        }
    }

    pub fn without_container(mut self, id: ContainerId) -> Self {
        self.containers.retain(|c| c.id != id);
        self
    }

    pub fn without_nav(mut self) -> Self {
        self.nav = None;
        self
    }

    pub fn without_year_placeholder(mut self) -> Self {
        self.year = None;
        self
    }

    pub fn settings(&self) -> &SiteSettings {
        &self.settings
    }

    /// Fills the footer year placeholder. Returns `false` if the page has none.
    pub fn set_year(&mut self, year: i32) -> bool {
        match self.year.as_mut() {
            Some(slot) => {
                *slot = year.to_string();
                true
            }
            None => false,
        }
    }

    pub fn year(&self) -> Option<&str> {
        self.year.as_deref()
    }

    pub fn nav_menu(&self) -> Option<&NavMenu> {
        self.nav.as_ref()
    }

    pub fn nav_menu_mut(&mut self) -> Option<&mut NavMenu> {
        self.nav.as_mut()
    }

    pub fn container(&self, id: ContainerId) -> Option<&Container> {
        self.containers.iter().find(|c| c.id == id)
    }

    pub fn container_mut(&mut self, id: ContainerId) -> Option<&mut Container> {
        self.containers.iter_mut().find(|c| c.id == id)
    }

    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    /// Places `card` at the end of the container and returns its identifier,
    /// or `None` if the page has no such container.
    pub fn append_card(&mut self, container: ContainerId, card: Card) -> Option<UnitId> {
        let id = UnitId(self.next_unit);
        let target = self.containers.iter_mut().find(|c| c.id == container)?;
        target.children.push(Node::Unit(VisualUnit::place(id, card)));
        self.next_unit += 1;
        Some(id)
    }

    pub fn unit(&self, id: UnitId) -> Option<&VisualUnit> {
        self.containers
            .iter()
            .flat_map(|c| c.units())
            .find(|unit| unit.id == id)
    }

    pub fn unit_mut(&mut self, id: UnitId) -> Option<&mut VisualUnit> {
        self.containers
            .iter_mut()
            .find_map(|container| container.unit_mut(id))
    }

    /// All units carrying `class`, in document order.
    pub fn units_with_class(&self, class: &str) -> Vec<UnitId> {
        self.containers
            .iter()
            .flat_map(|c| c.units())
            .filter(|unit| unit.classes.contains(class))
            .map(|unit| unit.id)
            .collect()
    }

    pub fn animated_units(&self) -> Vec<UnitId> {
        self.units_with_class(ANIMATION_CLASS)
    }

    pub fn set_bounds(&mut self, id: UnitId, bounds: Rect) -> bool {
        match self.unit_mut(id) {
            Some(unit) => {
                unit.bounds = Some(bounds);
                true
            }
            None => false,
        }
    }

    /// Marks every animated unit visible. Returns how many changed.
    pub fn reveal_all(&mut self) -> usize {
        let mut revealed = 0;
        for container in &mut self.containers {
            for node in &mut container.children {
                if let Node::Unit(unit) = node {
                    if unit.classes.contains(ANIMATION_CLASS) && unit.classes.add(VISIBLE_CLASS) {
                        revealed += 1;
                    }
                }
            }
        }
        revealed
    }

    /// Serializes the whole page.
    pub fn to_html(&self) -> String {
        let mut html = String::with_capacity(8192);

        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"UTF-8\">\n");
        html.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        html.push_str(&format!(
            "<title>{}</title>\n",
            escape(&self.settings.title)
        ));
        html.push_str(&format!(
            "<link rel=\"stylesheet\" href=\"{}\">\n",
            escape(&self.settings.stylesheet)
        ));
        html.push_str("<style>\n");
        for kind in CardKind::ALL {
            html.push_str(&format!(
                ".{}:hover {{ transform: translateY(-{}px); }}\n",
                kind.class_name(),
                kind.hover_lift_px()
            ));
        }
        html.push_str("</style>\n</head>\n<body>\n");

        if let Some(nav) = &self.nav {
            html.push_str(&nav.to_html(&self.settings.owner));
        }

        html.push_str("<main>\n");
        for container in &self.containers {
            let id = container.id;
            html.push_str(&format!(
                "<section id=\"{}\" class=\"section\">\n<div class=\"container\">\n",
                id.section_id()
            ));
            html.push_str(&format!(
                "<h2 class=\"section-title\">{}</h2>\n",
                id.heading()
            ));
            html.push_str(&format!(
                "<div id=\"{}\" class=\"{}\">\n",
                id.element_id(),
                id.grid_class()
            ));
            let inner = container.inner_html();
            if !inner.is_empty() {
                html.push_str(&inner);
                html.push('\n');
            }
            html.push_str("</div>\n</div>\n</section>\n");
        }
        html.push_str("</main>\n");

        html.push_str("<footer class=\"footer\">\n<p>&copy; ");
        if let Some(year) = &self.year {
            html.push_str(&format!(
                "<span id=\"{}\">{}</span> ",
                YEAR_PLACEHOLDER_ID,
                escape(year)
            ));
        }
        html.push_str(&format!(
            "{}. All rights reserved.</p>\n</footer>\n",
            escape(&self.settings.owner)
        ));
        html.push_str("</body>\n</html>\n");
        html
    }
}
