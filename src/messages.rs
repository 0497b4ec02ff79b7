use crate::config::Locale;

/// Catalog of every user-facing string. Handlers never hard-code message text;
/// they read it from here so the served locale is a deployment decision.
#[derive(Debug)]
pub struct Messages {
    // auth
    pub invalid_email: &'static str,
    pub password_too_short: &'static str,
    pub name_required: &'static str,
    pub email_taken: &'static str,
    pub registered: &'static str,
    pub logged_in: &'static str,
    pub invalid_credentials: &'static str,
    pub missing_token: &'static str,
    pub invalid_token: &'static str,

    // documents
    pub no_file: &'static str,
    pub unsupported_type: &'static str,
    pub file_too_large: &'static str,
    pub uploaded: &'static str,
    pub deleted: &'static str,
    pub document_not_found: &'static str,
    pub upload_failed: &'static str,

    // assistant
    pub question_required: &'static str,
    pub document_id_required: &'static str,
    pub compare_needs_two: &'static str,
    pub system_prompt: &'static str,
    pub empty_answer: &'static str,
    pub unprocessed_note: &'static str,
    pub fallback_templates: &'static [&'static str],
    pub general_comparison: &'static str,

    // fixture bodies served while no extraction pipeline exists
    pub summary_detailed_body: &'static str,
    pub summary_brief_body: &'static str,
    pub comparison_headers: [&'static str; 3],
    pub comparison_rows: [[&'static str; 3]; 3],
    pub quiz_mc_question: &'static str,
    pub quiz_mc_options: [&'static str; 4],
    pub quiz_text_question: &'static str,
    pub quiz_text_answer: &'static str,
    pub quiz_tf_question: &'static str,
    pub quiz_tf_statement: &'static str,

    // generic
    pub internal_error: &'static str,
}

impl Messages {
    pub fn for_locale(locale: Locale) -> &'static Messages {
        match locale {
            Locale::Ar => &AR,
            Locale::En => &EN,
        }
    }
}

pub static AR: Messages = Messages {
    invalid_email: "البريد الإلكتروني غير صحيح",
    password_too_short: "كلمة المرور يجب أن تكون 6 أحرف على الأقل",
    name_required: "اسم المستخدم مطلوب",
    email_taken: "المستخدم موجود بالفعل",
    registered: "تم إنشاء الحساب بنجاح",
    logged_in: "تم تسجيل الدخول بنجاح",
    invalid_credentials: "بيانات الدخول غير صحيحة",
    missing_token: "التوثيق مطلوب",
    invalid_token: "انتهت صلاحية الجلسة، يرجى تسجيل الدخول مجدداً",

    no_file: "لم يتم رفع أي ملف",
    unsupported_type: "نوع الملف غير مدعوم",
    file_too_large: "حجم الملف يتجاوز الحد المسموح",
    uploaded: "تم رفع الملف بنجاح",
    deleted: "تم حذف المستند بنجاح",
    document_not_found: "المستند غير موجود",
    upload_failed: "خطأ في رفع الملف",

    question_required: "السؤال مطلوب",
    document_id_required: "معرف المستند مطلوب",
    compare_needs_two: "مطلوب مستندين على الأقل للمقارنة",
    system_prompt: "أنت مساعد ذكي باللغة العربية متخصص في تحليل المستندات والإجابة على الأسئلة بناءً على محتواها. قدم إجابات دقيقة ومفيدة بناءً على المحتوى المتاح فقط. إذا لم تجد المعلومة في المستندات، اذكر ذلك بوضوح.",
    empty_answer: "عذراً، لم أتمكن من الإجابة على سؤالك.",
    unprocessed_note: "لم تتم معالجة محتوى هذا المستند بعد.",
    fallback_templates: &[
        "شكراً لسؤالك: \"{question}\"\n\nهذه إجابة تجريبية من المنصة. في النسخة الكاملة، سأقوم بتحليل المستندات المرفوعة والإجابة بناءً على محتواها.\n\nالمميزات المتاحة:\n• تحليل المستندات بالذكاء الاصطناعي\n• إنتاج الملخصات\n• المقارنات والجداول\n• الاختبارات التفاعلية",
        "سؤالك \"{question}\" وصل بنجاح.\n\nخدمة الذكاء الاصطناعي غير متاحة حالياً، لذا هذه إجابة مؤقتة. عند تفعيل مفتاح المزود سيتم تحليل مستنداتك والإجابة من محتواها مباشرة.",
        "تعذر الوصول إلى مزود الذكاء الاصطناعي الآن.\n\nتم استلام سؤالك: \"{question}\" وسيتمكن المساعد من الإجابة عليه من محتوى مستنداتك فور عودة الخدمة.",
    ],
    general_comparison: "مقارنة عامة",

    summary_detailed_body: "ملخص مفصل للمستند\n\nالنقاط الرئيسية:\n• النقطة الأولى من المستند\n• النقطة الثانية المهمة\n• الخلاصة والتوصيات\n\nهذا ملخص تجريبي. في النسخة الكاملة، سيتم تحليل محتوى المستند الفعلي.",
    summary_brief_body: "ملخص مختصر للمستند\n\nالنقاط الرئيسية:\n• النقطة الأولى من المستند\n• النقطة الثانية المهمة\n• الخلاصة والتوصيات\n\nهذا ملخص تجريبي. في النسخة الكاملة، سيتم تحليل محتوى المستند الفعلي.",
    comparison_headers: ["الجانب", "المستند الأول", "المستند الثاني"],
    comparison_rows: [
        ["النقطة الأولى", "وجهة نظر المستند الأول", "وجهة نظر المستند الثاني"],
        ["النقطة الثانية", "تفاصيل من المستند الأول", "تفاصيل من المستند الثاني"],
        ["الخلاصة", "استنتاج المستند الأول", "استنتاج المستند الثاني"],
    ],
    quiz_mc_question: "ما هي النقطة الرئيسية في المستند؟",
    quiz_mc_options: ["الخيار الأول", "الخيار الثاني", "الخيار الثالث", "الخيار الرابع"],
    quiz_text_question: "اذكر تفصيلاً مهماً من المستند.",
    quiz_text_answer: "إجابة نموذجية",
    quiz_tf_question: "هل المعلومة التالية صحيحة؟",
    quiz_tf_statement: "بيان للتحقق من صحته",

    internal_error: "خطأ في الخادم",
};

pub static EN: Messages = Messages {
    invalid_email: "Invalid email address",
    password_too_short: "Password must be at least 6 characters",
    name_required: "Name is required",
    email_taken: "User already exists",
    registered: "Account created successfully",
    logged_in: "Logged in successfully",
    invalid_credentials: "Invalid credentials",
    missing_token: "Authentication required",
    invalid_token: "Session expired, please log in again",

    no_file: "No file was uploaded",
    unsupported_type: "Unsupported file type",
    file_too_large: "File exceeds the maximum allowed size",
    uploaded: "File uploaded successfully",
    deleted: "Document deleted successfully",
    document_not_found: "Document not found",
    upload_failed: "Failed to upload the file",

    question_required: "A question is required",
    document_id_required: "A document id is required",
    compare_needs_two: "At least two documents are required for a comparison",
    system_prompt: "You are an assistant specialized in analyzing documents and answering questions from their content. Answer only from the supplied material, and state explicitly when the material does not contain the answer.",
    empty_answer: "Sorry, I could not answer your question.",
    unprocessed_note: "This document's content has not been processed yet.",
    fallback_templates: &[
        "Thanks for your question: \"{question}\"\n\nThis is a demo answer. With a configured provider key the assistant analyzes your uploaded documents and answers from their content.\n\nAvailable features:\n• AI document analysis\n• Summaries\n• Comparisons and tables\n• Interactive quizzes",
        "Your question \"{question}\" was received.\n\nThe AI service is currently unavailable, so this is a placeholder answer. Once a provider key is configured, answers come straight from your documents.",
        "The completion provider could not be reached.\n\nYour question \"{question}\" was recorded; the assistant will answer it from your documents as soon as the service is back.",
    ],
    general_comparison: "General comparison",

    summary_detailed_body: "Detailed summary of the document\n\nKey points:\n• First point from the document\n• Second important point\n• Conclusion and recommendations\n\nThis is a demo summary. The full version analyzes the actual document content.",
    summary_brief_body: "Brief summary of the document\n\nKey points:\n• First point from the document\n• Second important point\n• Conclusion and recommendations\n\nThis is a demo summary. The full version analyzes the actual document content.",
    comparison_headers: ["Aspect", "First document", "Second document"],
    comparison_rows: [
        ["First point", "First document's view", "Second document's view"],
        ["Second point", "Details from the first document", "Details from the second document"],
        ["Conclusion", "First document's conclusion", "Second document's conclusion"],
    ],
    quiz_mc_question: "What is the main point of the document?",
    quiz_mc_options: ["Option one", "Option two", "Option three", "Option four"],
    quiz_text_question: "Name an important detail from the document.",
    quiz_text_answer: "Model answer",
    quiz_tf_question: "Is the following statement correct?",
    quiz_tf_statement: "A statement to verify",

    internal_error: "Server error",
};
