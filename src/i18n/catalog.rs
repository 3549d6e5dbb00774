//! Static message catalogs, one table per language.
//!
//! Localized tables carry the same key set as English (checked in tests).

pub(super) const CATALOG_EN: &[(&str, &str)] = &[
    ("app_name", "Health Care System"),
    ("login_tab", "Login"),
    ("signup_tab", "Sign Up"),
    ("phone_label", "Phone Number"),
    ("login_btn", "Login"),
    ("name_label", "Full Name"),
    ("role_label", "Role"),
    ("worker_role", "Worker"),
    ("doctor_role", "Doctor"),
    ("admin_role", "Admin"),
    ("signup_btn", "Register"),
    ("login_fail", "Login failed. Check your phone number."),
    ("reg_fail", "Registration failed. Please try again."),
    ("signup_done", "Registration complete. Please log in."),
    ("busy", "Please wait for the current request to finish."),
    ("phone_required", "Enter a phone number."),
    ("name_required", "Enter your name."),
    ("welcome_worker", "Worker Dashboard"),
    ("welcome_doctor", "Doctor Dashboard"),
    ("admin_placeholder", "Admin Dashboard Placeholder"),
    ("logout", "Logout"),
    ("language_label", "Language"),
    ("your_hid", "Your Health ID"),
    ("report_summary", "Medical Report Summary"),
    ("blood_group", "Blood Group"),
    ("blood_summary", "Blood Report Summary"),
    ("injuries", "Injuries"),
    ("allergies", "Allergies"),
    ("remarks", "Doctor Remarks"),
    ("last_updated", "Last Updated"),
    ("my_notifications", "My Notifications"),
    ("no_notifs", "No new notifications"),
    ("doc_update", "Doctor Update"),
    ("nil_value", "NIL"),
    ("loading", "Loading..."),
    ("redirecting", "Redirecting..."),
    ("conn_error", "Connection error. Please try again."),
    ("patient_lookup", "Patient Lookup"),
    ("fetch_btn", "Fetch"),
    ("hid_required", "Enter a Health ID."),
    ("patient_not_found", "Patient not found"),
    ("record_added", "Record added successfully"),
    ("view_previous_reports", "View Previous Reports"),
    ("create_report", "Create Medical Report"),
    ("next_visit", "Next Visit"),
    ("optional", "Optional"),
    ("past_date", "Next visit cannot be in the past."),
    ("save_record", "Save Record"),
    ("post_history", "Medical History"),
    ("recent_history", "Recent"),
    ("no_records", "No previous records"),
    ("doctor_prefix", "Dr."),
    ("close", "Close"),
];

pub(super) const CATALOG_TA: &[(&str, &str)] = &[
    ("app_name", "சுகாதார பராமரிப்பு அமைப்பு"),
    ("login_tab", "உள்நுழைவு"),
    ("signup_tab", "பதிவு செய்"),
    ("phone_label", "தொலைபேசி எண்"),
    ("login_btn", "உள்நுழை"),
    ("name_label", "முழு பெயர்"),
    ("role_label", "பங்கு"),
    ("worker_role", "தொழிலாளர்"),
    ("doctor_role", "மருத்துவர்"),
    ("admin_role", "நிர்வாகி"),
    ("signup_btn", "பதிவு செய்"),
    ("login_fail", "உள்நுழைவு தோல்வியடைந்தது. உங்கள் தொலைபேசி எண்ணைச் சரிபார்க்கவும்."),
    ("reg_fail", "பதிவு தோல்வியடைந்தது. மீண்டும் முயற்சிக்கவும்."),
    ("signup_done", "பதிவு முடிந்தது. தயவுசெய்து உள்நுழையவும்."),
    ("busy", "தற்போதைய கோரிக்கை முடியும் வரை காத்திருக்கவும்."),
    ("phone_required", "தொலைபேசி எண்ணை உள்ளிடவும்."),
    ("name_required", "உங்கள் பெயரை உள்ளிடவும்."),
    ("welcome_worker", "தொழிலாளர் டாஷ்போர்டு"),
    ("welcome_doctor", "மருத்துவர் டாஷ்போர்டு"),
    ("logout", "வெளியேறு"),
    ("language_label", "மொழி"),
    ("your_hid", "உங்கள் சுகாதார அடையாள எண்"),
    ("report_summary", "மருத்துவ அறிக்கை சுருக்கம்"),
    ("blood_group", "இரத்த வகை"),
    ("blood_summary", "இரத்த அறிக்கை சுருக்கம்"),
    ("injuries", "காயங்கள்"),
    ("allergies", "ஒவ்வாமைகள்"),
    ("remarks", "மருத்துவர் குறிப்புகள்"),
    ("last_updated", "கடைசியாக புதுப்பிக்கப்பட்டது"),
    ("my_notifications", "எனது அறிவிப்புகள்"),
    ("no_notifs", "புதிய அறிவிப்புகள் இல்லை"),
    ("doc_update", "மருத்துவர் புதுப்பிப்பு"),
    ("nil_value", "இல்லை"),
    ("loading", "ஏற்றுகிறது..."),
    ("redirecting", "திசைதிருப்புகிறது..."),
    ("conn_error", "இணைப்பு பிழை. மீண்டும் முயற்சிக்கவும்."),
    ("patient_lookup", "நோயாளர் தேடல்"),
    ("fetch_btn", "தேடு"),
    ("hid_required", "சுகாதார அடையாள எண்ணை உள்ளிடவும்."),
    ("patient_not_found", "நோயாளர் கிடைக்கவில்லை"),
    ("record_added", "பதிவு வெற்றிகரமாக சேர்க்கப்பட்டது"),
    ("view_previous_reports", "முந்தைய அறிக்கைகளைப் பார்க்கவும்"),
    ("create_report", "மருத்துவ அறிக்கையை உருவாக்கு"),
    ("next_visit", "அடுத்த வருகை"),
    ("optional", "விருப்பத்தேர்வு"),
    ("past_date", "அடுத்த வருகை கடந்த தேதியாக இருக்க முடியாது."),
    ("save_record", "பதிவைச் சேமி"),
    ("post_history", "மருத்துவ வரலாறு"),
    ("recent_history", "சமீபத்திய"),
    ("no_records", "முந்தைய பதிவுகள் இல்லை"),
    ("doctor_prefix", "மரு."),
    ("admin_placeholder", "நிர்வாகி டாஷ்போர்டு (விரைவில்)"),
    ("close", "மூடு"),
];

pub(super) const CATALOG_HI: &[(&str, &str)] = &[
    ("app_name", "स्वास्थ्य देखभाल प्रणाली"),
    ("login_tab", "लॉगिन"),
    ("signup_tab", "साइन अप"),
    ("phone_label", "फ़ोन नंबर"),
    ("login_btn", "लॉगिन करें"),
    ("name_label", "पूरा नाम"),
    ("role_label", "भूमिका"),
    ("worker_role", "कर्मचारी"),
    ("doctor_role", "डॉक्टर"),
    ("admin_role", "व्यवस्थापक"),
    ("signup_btn", "पंजीकरण करें"),
    ("login_fail", "लॉगिन विफल रहा। अपना फ़ोन नंबर जाँचें।"),
    ("reg_fail", "पंजीकरण विफल रहा। कृपया पुनः प्रयास करें।"),
    ("signup_done", "पंजीकरण पूरा हुआ। कृपया लॉगिन करें।"),
    ("busy", "कृपया वर्तमान अनुरोध पूरा होने तक प्रतीक्षा करें।"),
    ("phone_required", "फ़ोन नंबर दर्ज करें।"),
    ("name_required", "अपना नाम दर्ज करें।"),
    ("welcome_worker", "कर्मचारी डैशबोर्ड"),
    ("welcome_doctor", "डॉक्टर डैशबोर्ड"),
    ("logout", "लॉगआउट"),
    ("language_label", "भाषा"),
    ("your_hid", "आपकी स्वास्थ्य आईडी"),
    ("report_summary", "चिकित्सा रिपोर्ट सारांश"),
    ("blood_group", "रक्त समूह"),
    ("blood_summary", "रक्त रिपोर्ट सारांश"),
    ("injuries", "चोटें"),
    ("allergies", "एलर्जी"),
    ("remarks", "डॉक्टर की टिप्पणी"),
    ("last_updated", "अंतिम अपडेट"),
    ("my_notifications", "मेरी सूचनाएँ"),
    ("no_notifs", "कोई नई सूचना नहीं"),
    ("doc_update", "डॉक्टर अपडेट"),
    ("nil_value", "शून्य"),
    ("loading", "लोड हो रहा है..."),
    ("redirecting", "पुनर्निर्देशित किया जा रहा है..."),
    ("conn_error", "कनेक्शन त्रुटि। कृपया पुनः प्रयास करें।"),
    ("patient_lookup", "मरीज़ खोजें"),
    ("fetch_btn", "खोजें"),
    ("hid_required", "स्वास्थ्य आईडी दर्ज करें।"),
    ("patient_not_found", "मरीज़ नहीं मिला"),
    ("record_added", "रिकॉर्ड सफलतापूर्वक जोड़ा गया"),
    ("view_previous_reports", "पिछली रिपोर्ट देखें"),
    ("create_report", "चिकित्सा रिपोर्ट बनाएँ"),
    ("next_visit", "अगली मुलाकात"),
    ("optional", "वैकल्पिक"),
    ("past_date", "अगली मुलाकात पिछली तारीख नहीं हो सकती।"),
    ("save_record", "रिकॉर्ड सहेजें"),
    ("post_history", "चिकित्सा इतिहास"),
    ("recent_history", "हाल का"),
    ("no_records", "कोई पिछला रिकॉर्ड नहीं"),
    ("doctor_prefix", "डॉ."),
    ("admin_placeholder", "व्यवस्थापक डैशबोर्ड (जल्द आ रहा है)"),
    ("close", "बंद करें"),
];
