//! Status codes and their default reason phrases.
//!
//! The phrase table is a fixed, read-only map built once per process. It is
//! only ever used as a fallback when no reason phrase is supplied, and it is
//! not the full IANA registry: it is a sparse 1xx–5xx subset with localized
//! phrases.
use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::errors::MessageError;

/// Status used when none is given.
pub const DEFAULT_STATUS: u16 = 200;

lazy_static! {
    static ref PHRASES: HashMap<u16, &'static str> = {
        let mut m = HashMap::new();
        m.insert(100, "Continuar");
        m.insert(101, "Protocolos de Switching");
        m.insert(102, "Procesando");
        m.insert(200, "OK");
        m.insert(201, "Creado");
        m.insert(202, "Aceptado");
        m.insert(203, "Informacion no Autorizada");
        m.insert(204, "Sin contenido");
        m.insert(205, "Restablecer contenido");
        m.insert(206, "Contenido parcial");
        m.insert(207, "Multi-estado");
        m.insert(208, "Ya informado");
        m.insert(300, "Múltiples opciones");
        m.insert(301, "Movido permanentemente");
        m.insert(302, "Encontrado");
        m.insert(303, "Ver otro");
        m.insert(304, "No modificado");
        m.insert(305, "Use Proxy");
        m.insert(306, "Switch Proxy");
        m.insert(307, "Temporary Redirect");
        m.insert(400, "Bad Request");
        m.insert(401, "No autorizado");
        m.insert(402, "Pago requerido");
        m.insert(403, "Olvidado");
        m.insert(404, "No encontrado");
        m.insert(405, "Metodo no permitido");
        m.insert(406, "No aceptable");
        m.insert(407, "Requiere actualización de Proxy");
        m.insert(408, "Solicitar tiempo de espera");
        m.insert(409, "Conflicto");
        m.insert(410, "Se ha ido");
        m.insert(411, "Longitud requerida");
        m.insert(412, "Condición previa Falló");
        m.insert(413, "Solicitar entidad demasiado grande");
        m.insert(414, "Request-URI demasiado grande");
        m.insert(415, "Tipo de papel no admitido");
        m.insert(416, "Rango solicitado no satisfactorio");
        m.insert(417, "Expectativa fallida");
        m.insert(418, "Yo'soy una tetera");
        m.insert(422, "Entidad no procesable");
        m.insert(423, "Bloqueado");
        m.insert(424, "Dependencia fallida");
        m.insert(425, "Colección desordenada");
        m.insert(426, "Se requiere actualización");
        m.insert(428, "Requisito previo");
        m.insert(429, "Demasiadas solicitudes");
        m.insert(431, "Campos de encabezado de solicitud demasiado grandes");
        m.insert(451, "No disponible por motivos legales");
        m.insert(500, "Error de servidor interno");
        m.insert(501, "No implementada");
        m.insert(502, "Puerta de enlace incorrecta");
        m.insert(503, "Servicio no disponible");
        m.insert(504, "Tiempo de espera de puerta de enlace");
        m.insert(505, "La variante también negocia");
        m.insert(506, "Variant Also Negotiates");
        m.insert(507, "Espacio insuficiente");
        m.insert(508, "Bucle detectado");
        m.insert(511, "Se requiere autenticación de red");
        m
    };
}

/// Default reason phrase for `code`, if the table knows it.
pub fn default_reason_phrase(code: u16) -> Option<&'static str> {
    PHRASES.get(&code).copied()
}

/// Iterates over every `(code, phrase)` pair in the table, unordered.
pub fn known_status_codes() -> impl Iterator<Item = (u16, &'static str)> {
    PHRASES.iter().map(|(code, phrase)| (*code, *phrase))
}

/// Picks the reason phrase for `code`.
///
/// An empty `reason` falls back to the table when the code is known. In every
/// other case `reason` is used as given, which may leave it empty.
pub(crate) fn resolve_reason(code: u16, reason: &str) -> String {
    if reason.is_empty() {
        if let Some(phrase) = default_reason_phrase(code) {
            return phrase.to_string();
        }
        log::debug!("status {}: no default reason phrase, leaving it empty", code);
    }
    reason.to_string()
}

/// Conversion into a numeric status code.
///
/// Any integer that fits in `u16` is accepted as-is, without a 1xx–5xx range
/// check. Strings must be a plain decimal number (surrounding whitespace is
/// ignored). Everything else is [`MessageError::InvalidStatusCode`].
pub trait IntoStatusCode {
    fn into_status_code(self) -> Result<u16, MessageError>;
}

impl IntoStatusCode for u16 {
    fn into_status_code(self) -> Result<u16, MessageError> {
        Ok(self)
    }
}

impl IntoStatusCode for http::StatusCode {
    fn into_status_code(self) -> Result<u16, MessageError> {
        Ok(self.as_u16())
    }
}

macro_rules! int_status_code {
    ($($t:ty),*) => {
        $(
            impl IntoStatusCode for $t {
                fn into_status_code(self) -> Result<u16, MessageError> {
                    u16::try_from(self)
                        .map_err(|_| MessageError::InvalidStatusCode(self.to_string()))
                }
            }
        )*
    };
}

int_status_code!(u8, i16, i32, i64, u32, u64, usize);

impl IntoStatusCode for &str {
    fn into_status_code(self) -> Result<u16, MessageError> {
        self.trim()
            .parse::<u16>()
            .map_err(|_| MessageError::InvalidStatusCode(self.to_string()))
    }
}

impl IntoStatusCode for String {
    fn into_status_code(self) -> Result<u16, MessageError> {
        self.as_str().into_status_code()
    }
}

impl IntoStatusCode for &String {
    fn into_status_code(self) -> Result<u16, MessageError> {
        self.as_str().into_status_code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lookups() {
        assert_eq!(default_reason_phrase(200), Some("OK"));
        assert_eq!(default_reason_phrase(404), Some("No encontrado"));
        assert_eq!(default_reason_phrase(506), Some("Variant Also Negotiates"));
        assert_eq!(default_reason_phrase(299), None);
        assert_eq!(default_reason_phrase(0), None);
    }

    #[test]
    fn table_is_sparse_1xx_to_5xx() {
        let codes: Vec<u16> = known_status_codes().map(|(c, _)| c).collect();
        assert_eq!(codes.len(), 58);
        assert!(codes.iter().all(|c| (100..=511).contains(c)));
        assert!(known_status_codes().all(|(_, p)| !p.is_empty()));
    }

    #[test]
    fn resolve_prefers_given_reason() {
        assert_eq!(resolve_reason(200, "Bespoke"), "Bespoke");
        assert_eq!(resolve_reason(200, ""), "OK");
        assert_eq!(resolve_reason(299, ""), "");
        assert_eq!(resolve_reason(299, "Custom"), "Custom");
    }

    #[test]
    fn integer_conversions() {
        assert_eq!(404u16.into_status_code().unwrap(), 404);
        assert_eq!(999i32.into_status_code().unwrap(), 999);
        assert_eq!(7u8.into_status_code().unwrap(), 7);
        assert_eq!(http::StatusCode::IM_A_TEAPOT.into_status_code().unwrap(), 418);

        assert!(matches!(
            (-1i32).into_status_code(),
            Err(MessageError::InvalidStatusCode(s)) if s == "-1"
        ));
        assert!(70_000u32.into_status_code().is_err());
    }

    #[test]
    fn string_conversions() {
        assert_eq!("201".into_status_code().unwrap(), 201);
        assert_eq!(" 503 ".into_status_code().unwrap(), 503);
        assert_eq!(String::from("302").into_status_code().unwrap(), 302);

        assert!("abc".into_status_code().is_err());
        assert!("".into_status_code().is_err());
        assert!("20x".into_status_code().is_err());
    }
}
