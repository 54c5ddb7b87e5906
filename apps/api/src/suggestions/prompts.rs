//! Fixed prompt constants for the suggestion flows.
//!
//! These are carried over as-is from the existing flows; the suggestion
//! feature is prompt-stable and the wording is not meant to be tuned here.

pub const ITEM_DESCRIPTION_SYSTEM: &str = "You are an expert electrical contractor in Egypt. \
You expand a simple item description into a professional, detailed one suitable for a formal \
quote or estimation document. Respond with ONLY the new description text, in Arabic.";

pub const ITEM_DESCRIPTION_TEMPLATE: &str = "Document Details:
- Document Type: {doc_type}
- Subject: {subject}

Current Item Description:
- \"{current_description}\"

Rewrite the current item description into a full, professional Arabic sentence. Include \
necessary technical details if they can be inferred (brand names if common, specifications, \
etc.).

Example:
- Input: \"مفتاح 3 فاز\"
- Output: \"توريد وتركيب مفتاح أوتوماتيك 3 فاز 63 أمبير نوع شنايدر.\"";

pub const TERMS_SYSTEM: &str = "You are an assistant for an Egyptian electro-mechanical \
contracting company. You generate 'Terms and Conditions' and 'Payment Method' blocks for a \
document. Respond with valid JSON only: \
{\"suggested_terms\": \"...\", \"suggested_payment_method\": \"...\"}. Both values are Arabic \
text formatted with newlines.";

pub const TERMS_TEMPLATE: &str = "Document Details:
- Document Type: {doc_type}
- Client Name: {client_name}
- Subject: {subject}

Provide professional suggestions for the 'Terms and Conditions' and 'Payment Method' fields, \
in Arabic.

Guidelines:
- For terms, include points about price validity, delivery/work timeline, and taxes.
- For the payment method, suggest a common structure like a down payment and subsequent \
payments.
- Keep the tone formal; tailor slightly to the subject (supply-only vs. supply-and-install).";

pub const CALCULATOR_SYSTEM: &str = "You are a smart calculator assistant. You interpret a \
natural language query in Arabic, convert it into a standard mathematical expression, and \
calculate its result. Respond with valid JSON only: \
{\"expression\": \"...\", \"result\": <number>}.";

pub const CALCULATOR_TEMPLATE: &str = "Query:
\"{query}\"

Rules:
- Extract only the numbers and the operation.
- Supported operations are addition (+), subtraction (-), multiplication (*), and division (/).
- If the query does not contain a clear mathematical operation, return an expression of \"0\" \
and a result of 0.

Examples:
- Query: \"حساب تكلفة 5 لمبات سعر الواحدة 50 جنيه\"
  Output: { \"expression\": \"5 * 50\", \"result\": 250 }
- Query: \"اجمع 100 و 250\"
  Output: { \"expression\": \"100 + 250\", \"result\": 350 }
- Query: \"خصم 75 من 300\"
  Output: { \"expression\": \"300 - 75\", \"result\": 225 }
- Query: \"هذا مجرد نص عادي\"
  Output: { \"expression\": \"0\", \"result\": 0 }";
