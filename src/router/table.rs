//! The dashboard's static route table.
//!
//! Besides hidden pages like redirect/403/404/login, every route should carry a
//! name. Permission-gated routes go in [`dynamic_routes`] and must be named.

use once_cell::sync::Lazy;

use super::meta::RouteMeta;
use super::record::{RouteRecord, ViewRef};

static CONSTANT_ROUTES: Lazy<Vec<RouteRecord>> = Lazy::new(build_constant_routes);

/// Routes registered for every session.
pub fn constant_routes() -> &'static [RouteRecord] {
    &CONSTANT_ROUTES
}

/// Routes registered according to the session's roles. Currently none.
pub fn dynamic_routes() -> Vec<RouteRecord> {
    Vec::new()
}

/// A management page: the layout at `path` hosting one page at the same path.
fn management_page(path: &str, view: &str, name: &str, title: &str, icon: &str) -> RouteRecord {
    RouteRecord::layout(
        path,
        ViewRef::Layout,
        vec![RouteRecord::leaf(path, ViewRef::view(view))
            .named(name)
            .with_meta(RouteMeta::titled(title).svg_icon(icon).keep_alive())],
    )
}

fn link(url: &str, name: &str, title: &str, icon: &str) -> RouteRecord {
    RouteRecord::external(url)
        .named(name)
        .with_meta(RouteMeta::titled(title).svg_icon(icon))
}

fn build_constant_routes() -> Vec<RouteRecord> {
    vec![
        RouteRecord::layout(
            "/redirect",
            ViewRef::Layout,
            vec![RouteRecord::leaf(":path(.*)", ViewRef::view("views/redirect/index"))],
        )
        .with_meta(RouteMeta::hidden_page()),
        RouteRecord::leaf("/403", ViewRef::view("views/error-page/403"))
            .with_meta(RouteMeta::hidden_page()),
        RouteRecord::leaf("/404", ViewRef::view("views/error-page/404"))
            .with_meta(RouteMeta::hidden_page())
            .with_alias("/:pathMatch(.*)*"),
        RouteRecord::leaf("/login", ViewRef::view("views/login/index"))
            .with_meta(RouteMeta::hidden_page()),
        RouteRecord::layout(
            "/",
            ViewRef::Layout,
            vec![RouteRecord::leaf("dashboard", ViewRef::view("views/dashboard/index"))
                .named("Dashboard")
                .with_meta(RouteMeta::titled("首页").svg_icon("dashboard").affix())],
        )
        .redirect_to("/dashboard"),
        management_page(
            "/user-manage",
            "views/user-manage/index",
            "UserManage",
            "账号管理",
            "user",
        ),
        management_page(
            "/item-manage",
            "views/item-manage/index",
            "ItemManage",
            "物品管理",
            "lost-item",
        ),
        management_page(
            "/comment-manage",
            "views/comment-manage/index",
            "CommentManage",
            "评论管理",
            "comment",
        ),
        management_page(
            "/notice-manage",
            "views/notice-manage/index",
            "NoticeManage",
            "通知管理",
            "notice",
        ),
        management_page(
            "/category-manage",
            "views/category-manage/index",
            "CategoryManage",
            "物品类型管理",
            "category",
        ),
        management_page(
            "/file-manage",
            "views/file-manage/index",
            "FileManage",
            "文件管理",
            "file",
        ),
        RouteRecord::layout(
            "/menu",
            ViewRef::Layout,
            vec![
                RouteRecord::layout(
                    "menu1",
                    ViewRef::Placeholder,
                    vec![
                        link(
                            "https://element-plus.org/zh-CN/component/overview.html",
                            "Link3",
                            "ElementPlus",
                            "tutorial",
                        ),
                        link("https://www.iconfont.cn/", "Link4", "icon网站", "document"),
                        link(
                            "https://juejin.cn/post/7089377403717287972",
                            "Link1",
                            "中文文档",
                            "document",
                        ),
                        link(
                            "https://juejin.cn/column/7207659644487139387",
                            "Link2",
                            "新手教程",
                            "tutorial",
                        ),
                    ],
                )
                .named("Menu1")
                .redirect_to("/menu/")
                .with_meta(RouteMeta::titled("开发工具").svg_icon("tools")),
                // Shares its name with the first tutorial link.
                link(
                    "https://github.com/hub6622/LostAndFound_front_back",
                    "Link1",
                    "Github",
                    "github",
                ),
            ],
        )
        .named("Menu")
        .redirect_to("/menu/menu1")
        .with_meta(RouteMeta::titled("关于本站").svg_icon("menu")),
    ]
}
