// [libs/domain/models-rs/src/tests_serialization.rs]
/**
 * =================================================================
 * APARATO: DOMAIN SERIALIZATION TEST (V3.1 - INTEGRATION LEVEL)
 * CLASIFICACIÓN: TRINITY EVIDENCE (ESTRATO L2-MODELS)
 * RESPONSABILIDAD: CERTIFICACIÓN DE PARIDAD JSON DEL PROTOCOLO LAMBDA
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. STRICT SHAPES: Certifica que 'deny_unknown_fields' rechaza
 *    material extraño en toda petición del protocolo.
 * 2. SPARSE REPLIES: Valida la omisión de campos nulos para preservar
 *    la forma histórica de las respuestas.
 *
 * # Mathematical Proof (U256 Stringification):
 * JSON no soporta enteros de 256 bits sin pérdida de precisión; el
 * protocolo transporta todo escalar como String hexadecimal para
 * garantizar paridad bit-perfecta.
 * =================================================================
 */
