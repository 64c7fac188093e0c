//! The built-in Rocket.Chat REST catalog.
//!
//! Descriptions and parameter order are part of the measured token cost;
//! any edit here invalidates `snapshots/token_counts.json`.

use super::model::{Category, Endpoint, Method, ParamType, Parameter};

const fn required(
    name: &'static str,
    param_type: ParamType,
    description: &'static str,
) -> Parameter {
    Parameter {
        name,
        param_type,
        required: true,
        description,
    }
}

const fn optional(
    name: &'static str,
    param_type: ParamType,
    description: &'static str,
) -> Parameter {
    Parameter {
        name,
        param_type,
        required: false,
        description,
    }
}

/// Every endpoint the generator knows about, in catalog order.
pub static ENDPOINTS: &[Endpoint] = &[
    // Auth
    Endpoint {
        id: "login",
        method: Method::Post,
        path: "/api/v1/login",
        description:
            "Authenticate a user with username/email and password. Returns authToken and userId.",
        category: Category::Auth,
        requires_auth: false,
        parameters: &[
            required("user", ParamType::String, "Username or email"),
            required("password", ParamType::String, "User password"),
        ],
    },
    Endpoint {
        id: "logout",
        method: Method::Post,
        path: "/api/v1/logout",
        description: "Invalidate the current authentication token and log out.",
        category: Category::Auth,
        requires_auth: true,
        parameters: &[],
    },
    Endpoint {
        id: "me",
        method: Method::Get,
        path: "/api/v1/me",
        description:
            "Get the authenticated user's profile information including username, email, and roles.",
        category: Category::Auth,
        requires_auth: true,
        parameters: &[],
    },

    // Channels
    Endpoint {
        id: "channels.list",
        method: Method::Get,
        path: "/api/v1/channels.list",
        description:
            "List all public channels on the server. Supports pagination with offset and count.",
        category: Category::Channels,
        requires_auth: true,
        parameters: &[
            optional("offset", ParamType::Number, "Number of items to skip"),
            optional("count", ParamType::Number, "Number of items to return"),
        ],
    },
    Endpoint {
        id: "channels.info",
        method: Method::Get,
        path: "/api/v1/channels.info",
        description: "Get detailed information about a specific channel by its ID or name.",
        category: Category::Channels,
        requires_auth: true,
        parameters: &[
            optional("roomId", ParamType::String, "The channel ID"),
            optional("roomName", ParamType::String, "The channel name"),
        ],
    },
    Endpoint {
        id: "channels.create",
        method: Method::Post,
        path: "/api/v1/channels.create",
        description: "Create a new public channel with specified name and optional members.",
        category: Category::Channels,
        requires_auth: true,
        parameters: &[
            required("name", ParamType::String, "Channel name"),
            optional("members", ParamType::Array, "Array of usernames to invite"),
            optional("readOnly", ParamType::Boolean, "Whether the channel is read-only"),
        ],
    },
    Endpoint {
        id: "channels.history",
        method: Method::Get,
        path: "/api/v1/channels.history",
        description:
            "Retrieve message history for a specific channel. Supports pagination and date filtering.",
        category: Category::Channels,
        requires_auth: true,
        parameters: &[
            required("roomId", ParamType::String, "The channel ID"),
            optional("count", ParamType::Number, "Number of messages to return"),
            optional("offset", ParamType::Number, "Number of messages to skip"),
            optional("latest", ParamType::String, "ISO timestamp — newest message date"),
            optional("oldest", ParamType::String, "ISO timestamp — oldest message date"),
        ],
    },
    Endpoint {
        id: "channels.members",
        method: Method::Get,
        path: "/api/v1/channels.members",
        description: "List all members of a specific channel.",
        category: Category::Channels,
        requires_auth: true,
        parameters: &[
            required("roomId", ParamType::String, "The channel ID"),
            optional("offset", ParamType::Number, "Number of items to skip"),
            optional("count", ParamType::Number, "Number of items to return"),
        ],
    },
    Endpoint {
        id: "channels.join",
        method: Method::Post,
        path: "/api/v1/channels.join",
        description: "Join a public channel by its ID.",
        category: Category::Channels,
        requires_auth: true,
        parameters: &[
            required("roomId", ParamType::String, "The channel ID to join"),
        ],
    },
    Endpoint {
        id: "channels.leave",
        method: Method::Post,
        path: "/api/v1/channels.leave",
        description: "Leave a channel by its ID.",
        category: Category::Channels,
        requires_auth: true,
        parameters: &[
            required("roomId", ParamType::String, "The channel ID to leave"),
        ],
    },

    // Messaging
    Endpoint {
        id: "chat.sendMessage",
        method: Method::Post,
        path: "/api/v1/chat.sendMessage",
        description:
            "Send a new message to a channel or direct message. Supports attachments and formatting.",
        category: Category::Messaging,
        requires_auth: true,
        parameters: &[
            required(
                "message",
                ParamType::Object,
                "Message object with rid (room ID) and msg (text)",
            ),
        ],
    },
    Endpoint {
        id: "chat.postMessage",
        method: Method::Post,
        path: "/api/v1/chat.postMessage",
        description:
            "Post a message to a channel using channel name or ID. Simpler alternative to sendMessage.",
        category: Category::Messaging,
        requires_auth: true,
        parameters: &[
            optional("channel", ParamType::String, "Channel name (e.g., #general)"),
            optional("roomId", ParamType::String, "Room ID"),
            required("text", ParamType::String, "Message text"),
            optional("alias", ParamType::String, "Display name alias"),
            optional("emoji", ParamType::String, "Emoji avatar (e.g., :smirk:)"),
            optional("avatar", ParamType::String, "Avatar URL"),
        ],
    },
    Endpoint {
        id: "chat.getMessage",
        method: Method::Get,
        path: "/api/v1/chat.getMessage",
        description: "Retrieve a single message by its ID.",
        category: Category::Messaging,
        requires_auth: true,
        parameters: &[
            required("msgId", ParamType::String, "The message ID"),
        ],
    },
    Endpoint {
        id: "chat.update",
        method: Method::Post,
        path: "/api/v1/chat.update",
        description: "Update/edit an existing message by its ID.",
        category: Category::Messaging,
        requires_auth: true,
        parameters: &[
            required("roomId", ParamType::String, "The room ID"),
            required("msgId", ParamType::String, "The message ID to update"),
            required("text", ParamType::String, "New message text"),
        ],
    },
    Endpoint {
        id: "chat.delete",
        method: Method::Post,
        path: "/api/v1/chat.delete",
        description: "Delete a message by its ID from a specific room.",
        category: Category::Messaging,
        requires_auth: true,
        parameters: &[
            required("roomId", ParamType::String, "The room ID"),
            required("msgId", ParamType::String, "The message ID to delete"),
        ],
    },
    Endpoint {
        id: "chat.search",
        method: Method::Get,
        path: "/api/v1/chat.search",
        description: "Search for messages in a specific room matching a search term.",
        category: Category::Messaging,
        requires_auth: true,
        parameters: &[
            required("roomId", ParamType::String, "The room ID"),
            required("searchText", ParamType::String, "Text to search for"),
            optional("count", ParamType::Number, "Number of results to return"),
        ],
    },

    // Users
    Endpoint {
        id: "users.info",
        method: Method::Get,
        path: "/api/v1/users.info",
        description: "Get detailed information about a user by ID or username.",
        category: Category::Users,
        requires_auth: true,
        parameters: &[
            optional("userId", ParamType::String, "The user ID"),
            optional("username", ParamType::String, "The username"),
        ],
    },
    Endpoint {
        id: "users.list",
        method: Method::Get,
        path: "/api/v1/users.list",
        description: "List all users on the server. Supports pagination and filtering.",
        category: Category::Users,
        requires_auth: true,
        parameters: &[
            optional("offset", ParamType::Number, "Number of items to skip"),
            optional("count", ParamType::Number, "Number of items to return"),
        ],
    },
    Endpoint {
        id: "users.create",
        method: Method::Post,
        path: "/api/v1/users.create",
        description: "Create a new user account (requires admin privileges).",
        category: Category::Users,
        requires_auth: true,
        parameters: &[
            required("email", ParamType::String, "User email"),
            required("name", ParamType::String, "Display name"),
            required("password", ParamType::String, "User password"),
            required("username", ParamType::String, "Username"),
            optional("roles", ParamType::Array, "Array of role names"),
        ],
    },
    Endpoint {
        id: "users.update",
        method: Method::Post,
        path: "/api/v1/users.update",
        description: "Update an existing user's data (requires admin privileges).",
        category: Category::Users,
        requires_auth: true,
        parameters: &[
            required("userId", ParamType::String, "The user ID to update"),
            required("data", ParamType::Object, "Object with fields to update (name, email, etc.)"),
        ],
    },
    Endpoint {
        id: "users.setAvatar",
        method: Method::Post,
        path: "/api/v1/users.setAvatar",
        description: "Set a user's avatar from a URL.",
        category: Category::Users,
        requires_auth: true,
        parameters: &[
            required("avatarUrl", ParamType::String, "URL of the avatar image"),
            optional("userId", ParamType::String, "User ID (admin only)"),
        ],
    },

    // Private groups
    Endpoint {
        id: "groups.list",
        method: Method::Get,
        path: "/api/v1/groups.list",
        description: "List all private groups the authenticated user is part of.",
        category: Category::Groups,
        requires_auth: true,
        parameters: &[
            optional("offset", ParamType::Number, "Number of items to skip"),
            optional("count", ParamType::Number, "Number of items to return"),
        ],
    },
    Endpoint {
        id: "groups.create",
        method: Method::Post,
        path: "/api/v1/groups.create",
        description: "Create a new private group with specified name and optional members.",
        category: Category::Groups,
        requires_auth: true,
        parameters: &[
            required("name", ParamType::String, "Group name"),
            optional("members", ParamType::Array, "Array of usernames to invite"),
            optional("readOnly", ParamType::Boolean, "Whether the group is read-only"),
        ],
    },
    Endpoint {
        id: "groups.info",
        method: Method::Get,
        path: "/api/v1/groups.info",
        description: "Get detailed information about a private group by its ID or name.",
        category: Category::Groups,
        requires_auth: true,
        parameters: &[
            optional("roomId", ParamType::String, "The group ID"),
            optional("roomName", ParamType::String, "The group name"),
        ],
    },
    Endpoint {
        id: "groups.history",
        method: Method::Get,
        path: "/api/v1/groups.history",
        description: "Retrieve message history for a private group.",
        category: Category::Groups,
        requires_auth: true,
        parameters: &[
            required("roomId", ParamType::String, "The group ID"),
            optional("count", ParamType::Number, "Number of messages to return"),
            optional("offset", ParamType::Number, "Number of messages to skip"),
        ],
    },
    Endpoint {
        id: "groups.members",
        method: Method::Get,
        path: "/api/v1/groups.members",
        description: "List all members of a private group.",
        category: Category::Groups,
        requires_auth: true,
        parameters: &[
            required("roomId", ParamType::String, "The group ID"),
            optional("offset", ParamType::Number, "Number of items to skip"),
            optional("count", ParamType::Number, "Number of items to return"),
        ],
    },

    // Misc
    Endpoint {
        id: "info",
        method: Method::Get,
        path: "/api/v1/info",
        description: "Get the Rocket.Chat server information including version and build details.",
        category: Category::Misc,
        requires_auth: false,
        parameters: &[],
    },
    Endpoint {
        id: "statistics",
        method: Method::Get,
        path: "/api/v1/statistics",
        description:
            "Get server statistics including total users, messages, rooms, and online users.",
        category: Category::Misc,
        requires_auth: true,
        parameters: &[],
    },
    Endpoint {
        id: "settings.public",
        method: Method::Get,
        path: "/api/v1/settings.public",
        description: "Get all public server settings (does not require authentication).",
        category: Category::Misc,
        requires_auth: false,
        parameters: &[
            optional("offset", ParamType::Number, "Number of items to skip"),
            optional("count", ParamType::Number, "Number of items to return"),
        ],
    },
    Endpoint {
        id: "emoji-custom.list",
        method: Method::Get,
        path: "/api/v1/emoji-custom.list",
        description: "List all custom emojis available on the server.",
        category: Category::Misc,
        requires_auth: true,
        parameters: &[],
    },
    Endpoint {
        id: "subscriptions.getAll",
        method: Method::Get,
        path: "/api/v1/subscriptions.getAll",
        description:
            "Get all subscriptions (rooms the user has joined) for the authenticated user.",
        category: Category::Misc,
        requires_auth: true,
        parameters: &[
            optional(
                "updatedSince",
                ParamType::String,
                "ISO date — only return subscriptions updated after this date",
            ),
        ],
    },
];
