//! Localized message catalog.
//!
//! One [`StringTable`] per supported language. Entries that take arguments
//! are stored as `{}` templates and filled through the helper methods so
//! callers never touch the raw template text.

use crate::types::{Language, OptionCard};

/// All user-facing literals for one language.
///
/// Template entries (`{}` placeholders) are accessed through the formatting
/// methods below; plain entries are read directly.
#[derive(Debug)]
pub struct StringTable {
    pub welcome: &'static str,
    pub intro: &'static str,
    pub you: &'static str,
    pub bot: &'static str,
    pub ask: &'static str,
    pub options_intro: &'static str,
    pub hours: &'static str,
    pub location: &'static str,
    pub contact: &'static str,
    pub pricing: &'static str,
    pub returns: &'static str,
    pub payments: &'static str,
    pub ticket_prompt: &'static str,
    ticket_created: &'static str,
    pub track_prompt: &'static str,
    track_result: &'static str,
    pub assist_prompt: &'static str,
    pub assist_tip: &'static str,
    pub lead_prompt: &'static str,
    thanks_lead: &'static str,
    pub qualify_prompt: &'static str,
    pub budget_reco: &'static str,
    pub schedule_prompt: &'static str,
    scheduled: &'static str,
    pub compare_plans: &'static str,
    personalize: &'static str,
    lang_switched: &'static str,
    pub agent_reply: &'static str,
    pub not_sure: &'static str,
    pub fallback_generic: &'static str,
    pub fallback_business: &'static str,
    pub thinking: &'static str,
    pub ai_failed: &'static str,
    pub ai_enabled_notice: &'static str,
    pub ai_disabled_notice: &'static str,
    pub ai_key_prompt: &'static str,
    pub ai_key_saved: &'static str,
    pub ai_key_missing: &'static str,
    pub marketing_advice: &'static str,
    pub finance_advice: &'static str,
    pub hr_advice: &'static str,
    pub startup_advice: &'static str,
    pub label_browse: &'static str,
    pub label_track: &'static str,
    pub label_agent: &'static str,
    pub label_compare: &'static str,
    browse_cards: [(&'static str, &'static str); 3],
}

impl StringTable {
    pub fn ticket_created(&self, id: &str) -> String {
        fill(self.ticket_created, &[id])
    }

    pub fn track_result(&self, id: &str, eta: &str) -> String {
        fill(self.track_result, &[id, eta])
    }

    pub fn thanks_lead(&self, name: &str) -> String {
        fill(self.thanks_lead, &[name])
    }

    pub fn scheduled(&self, slot: &str) -> String {
        fill(self.scheduled, &[slot])
    }

    pub fn personalize(&self, name: &str) -> String {
        fill(self.personalize, &[name])
    }

    pub fn lang_switched(&self, lang: Language) -> String {
        let name = match lang {
            Language::En => "English",
            Language::Es => "Español",
        };
        fill(self.lang_switched, &[name])
    }

    /// Product category cards for the browse intent.
    pub fn browse_cards(&self) -> Vec<OptionCard> {
        self.browse_cards
            .iter()
            .map(|(title, detail)| OptionCard {
                title: (*title).to_string(),
                detail: (*detail).to_string(),
            })
            .collect()
    }
}

/// Substitute successive `{}` placeholders with `args`.
fn fill(template: &str, args: &[&str]) -> String {
    let mut out = template.to_string();
    for arg in args {
        out = out.replacen("{}", arg, 1);
    }
    out
}

/// Look up the string table for a language.
pub fn table(lang: Language) -> &'static StringTable {
    match lang {
        Language::En => &EN,
        Language::Es => &ES,
    }
}

static EN: StringTable = StringTable {
    welcome: "Hello! How can I help you today?",
    intro: "I'm your virtual assistant, here to help with questions and support.",
    you: "You",
    bot: "BizAssist",
    ask: "Type your message...",
    options_intro: "Here are some things I can help with:",
    hours: "Our office is open Monday through Friday, 9 AM to 6 PM.",
    location: "We are located at 123 Business Ave, Suite 456.",
    contact: "You can reach us at support@example.com or +1 (555) 000-1234.",
    pricing: "We offer 3 packages: Basic, Premium, and Enterprise. Would you like a comparison?",
    returns: "We offer free shipping over $50 and 30-day returns.",
    payments: "We accept Visa, MasterCard, and PayPal.",
    ticket_prompt: "Please describe the issue you're facing, and I'll create a support ticket.",
    ticket_created: "Ticket created: {}. Our team will contact you soon.",
    track_prompt: "Please enter your order ID to track your shipment.",
    track_result: "Order {} is in transit. Estimated delivery: {}.",
    assist_prompt: "Please describe the product or issue and I'll help troubleshoot.",
    assist_tip: "Thanks. Here are some tips: restart the app, clear cache, and update to the latest version. If the issue persists, I can escalate to support.",
    lead_prompt: "Can I have your name and email to send more details?",
    thanks_lead: "Thanks, {}. We'll follow up shortly.",
    qualify_prompt: "What is your budget range? (e.g., <$100, $100-$500, >$500)",
    budget_reco: "Thanks! Based on your budget, I recommend starting with our Premium plan.",
    schedule_prompt: "Would you like to book a demo? Available today: 2 PM or 4 PM.",
    scheduled: "Demo booked for {}. You'll receive a reminder.",
    compare_plans: "Standard vs Premium: Premium adds priority support and advanced features.",
    personalize: "Welcome back, {}! Continue where we left off?",
    lang_switched: "Language switched to {}.",
    agent_reply: "It seems I might need help here. Would you like to chat with an agent?",
    not_sure: "I'm not sure yet, but I'm learning every day.",
    fallback_generic: "I can help with FAQs, orders, support, and more. Try the quick actions.",
    fallback_business: "That sounds like a business question. Enable AI assist for a detailed answer, or try the quick actions.",
    thinking: "Thinking...",
    ai_failed: "AI assist is unavailable right now; answering from my built-in knowledge instead.",
    ai_enabled_notice: "AI assist enabled. Free-form questions will use the smart model.",
    ai_disabled_notice: "AI assist disabled. I'll answer from my built-in knowledge.",
    ai_key_prompt: "Please provide an API key to activate AI assist.",
    ai_key_saved: "API key saved.",
    ai_key_missing: "No key provided; AI assist stays disabled.",
    marketing_advice: "Marketing tip: focus on one channel, measure cost per lead, and double down on what converts.",
    finance_advice: "Finance tip: keep 3-6 months of runway, review expenses monthly, and invoice promptly.",
    hr_advice: "HR tip: write the role scorecard before interviewing, and onboard with a 30-60-90 day plan.",
    startup_advice: "Startup tip: talk to ten customers before building, and charge from day one.",
    label_browse: "Browse products",
    label_track: "Track my order",
    label_agent: "Speak to an agent",
    label_compare: "Compare plans",
    browse_cards: [
        ("Electronics", "Top sellers and accessories"),
        ("Apparel", "Shirts, shoes, and more"),
        ("Home goods", "Decor and essentials"),
    ],
};

static ES: StringTable = StringTable {
    welcome: "¡Hola! ¿En qué puedo ayudarte hoy?",
    intro: "Soy tu asistente virtual, aquí para ayudarte con preguntas y soporte.",
    you: "Tú",
    bot: "BizAssist",
    ask: "Escribe tu mensaje...",
    options_intro: "Estas son algunas cosas con las que puedo ayudar:",
    hours: "Abrimos de lunes a viernes, de 9 AM a 6 PM.",
    location: "Estamos en 123 Business Ave, Oficina 456.",
    contact: "Escríbenos a support@example.com o +1 (555) 000-1234.",
    pricing: "Ofrecemos 3 planes: Básico, Premium y Enterprise. ¿Quieres una comparación?",
    returns: "Envío gratis en pedidos > $50 y devoluciones en 30 días.",
    payments: "Aceptamos Visa, MasterCard y PayPal.",
    ticket_prompt: "Describe el problema y crearé un ticket de soporte.",
    ticket_created: "Ticket creado: {}. Nuestro equipo te contactará pronto.",
    track_prompt: "Ingresa tu ID de pedido para rastrear el envío.",
    track_result: "Pedido {} en tránsito. Entrega estimada: {}.",
    assist_prompt: "Describe el producto o problema y te ayudaré.",
    assist_tip: "Gracias. Algunos consejos: reinicia la aplicación, borra la caché y actualiza a la última versión. Si el problema persiste, puedo escalarlo a soporte.",
    lead_prompt: "¿Me das tu nombre y correo para enviarte más detalles?",
    thanks_lead: "Gracias, {}. Te contactaremos en breve.",
    qualify_prompt: "¿Cuál es tu presupuesto? (p.ej., <$100, $100-$500, >$500)",
    budget_reco: "¡Gracias! Según tu presupuesto, te recomiendo empezar con nuestro plan Premium.",
    schedule_prompt: "¿Quieres reservar una demo? Hoy: 2 PM o 4 PM.",
    scheduled: "Demo reservada a las {}. Recibirás un recordatorio.",
    compare_plans: "Estándar vs Premium: Premium incluye soporte prioritario y funciones avanzadas.",
    personalize: "¡Bienvenido de nuevo, {}! ¿Continuamos donde quedamos?",
    lang_switched: "Idioma cambiado a {}.",
    agent_reply: "Parece que necesito ayuda aquí. ¿Quieres hablar con un agente?",
    not_sure: "Aún no estoy seguro, pero aprendo cada día.",
    fallback_generic: "Puedo ayudar con preguntas frecuentes, pedidos, soporte y más. Prueba las acciones rápidas.",
    fallback_business: "Parece una pregunta de negocios. Activa el asistente de IA para una respuesta detallada, o prueba las acciones rápidas.",
    thinking: "Pensando...",
    ai_failed: "El asistente de IA no está disponible; respondo con mi conocimiento integrado.",
    ai_enabled_notice: "Asistente de IA activado. Las preguntas libres usarán el modelo inteligente.",
    ai_disabled_notice: "Asistente de IA desactivado. Responderé con mi conocimiento integrado.",
    ai_key_prompt: "Proporciona una clave de API para activar el asistente de IA.",
    ai_key_saved: "Clave de API guardada.",
    ai_key_missing: "No se proporcionó clave; el asistente de IA sigue desactivado.",
    marketing_advice: "Consejo de marketing: céntrate en un canal, mide el costo por lead y refuerza lo que convierte.",
    finance_advice: "Consejo financiero: mantén 3-6 meses de reserva, revisa gastos cada mes y factura sin demora.",
    hr_advice: "Consejo de RRHH: define el perfil del puesto antes de entrevistar e incorpora con un plan de 30-60-90 días.",
    startup_advice: "Consejo para startups: habla con diez clientes antes de construir y cobra desde el primer día.",
    label_browse: "Ver productos",
    label_track: "Rastrear mi pedido",
    label_agent: "Hablar con un agente",
    label_compare: "Comparar planes",
    browse_cards: [
        ("Electrónica", "Los más vendidos y accesorios"),
        ("Ropa", "Camisas, zapatos y más"),
        ("Hogar", "Decoración y esenciales"),
    ],
};
