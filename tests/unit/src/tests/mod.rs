mod user_preferences;
