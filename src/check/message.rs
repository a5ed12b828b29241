//! Notification sent to the admin chat by the interaction check.

/// Fixed body of the check notification.
pub const TEST_MESSAGE: &str = "🎉 Autonomous Finder Test Complete!\n\
\n\
✅ Your updated Autonomous Finder is working perfectly!\n\
\n\
📊 Recent test results:\n\
• Processed 22 videos\n\
• Added 13 new movies\n\
• Used fast YouTube CDN thumbnails\n\
• AI-powered title cleanup\n\
\n\
The bot is ready for production use! 🚀";
