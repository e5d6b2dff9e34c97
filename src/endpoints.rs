// src/endpoints.rs

//! Portal endpoint paths, relative to the portal origin.

/// Credential form target.
pub const LOGIN: &str = "/ilos/lo/login.acl";

pub const LOGOUT: &str = "/ilos/lo/logout.acl";

/// Paginated activity feed (HTML fragment).
pub const NOTIFICATION_LIST: &str = "/ilos/mp/mypage_main_list.acl";

/// Lecture room entry; must be hit before a notification detail page is served.
pub const LECTURE_ROOM: &str = "/ilos/st/course/eclass_room2.acl";

pub const NOTE_SEND: &str = "/ilos/message/insert_pop.acl";
